//! Route modules for the Lectura server

pub mod conversation;
pub mod convert;
pub mod health;
pub mod lesson;
pub mod levels;
pub mod narrate;
pub mod parse;
pub mod session;
pub mod tts;

use axum::Router;

use crate::state::AppState;

/// Build the full application router for the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api", api_router())
        .with_state(state)
}

/// Assemble every `/api` route.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(convert::router())
        .merge(levels::router())
        .merge(narrate::router())
        .merge(conversation::router())
        .merge(tts::router())
        .merge(parse::router())
        .merge(lesson::router())
        .merge(session::router())
}
