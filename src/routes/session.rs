//! Session bridge routes
//!
//! The bridge carries converted content from the upload step to the
//! reader. A put without a token mints one; a put with a token
//! overwrites that slot. Readers that find no slot treat it as a fatal
//! precondition and send the user back to upload.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::ModeContent;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSessionRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    #[serde(flatten)]
    pub content: ModeContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutSessionResponse {
    pub session_id: Uuid,
}

/// The bridged payload; the `mode` tag rides inside `ModeContent`.
#[derive(Debug, Serialize)]
pub struct GetSessionResponse {
    #[serde(flatten)]
    pub content: ModeContent,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(put_session))
        .route("/session/:id", get(get_session))
        .route("/session/:id", delete(clear_session))
}

async fn put_session(
    State(state): State<AppState>,
    Json(request): Json<PutSessionRequest>,
) -> Result<Json<PutSessionResponse>> {
    let session_id = state
        .bridge()
        .put(request.session_id, request.content)
        .await;

    Ok(Json(PutSessionResponse { session_id }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetSessionResponse>> {
    let entry = state
        .bridge()
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No session content for {}", id)))?;

    Ok(Json(GetSessionResponse {
        content: entry.content,
    }))
}

async fn clear_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    if state.bridge().clear(id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
