//! Narration route
//!
//! POST /api/narrate — convert a PDF into a spoken-style narration via
//! the document-aware provider.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pdf;
use crate::state::AppState;

const NARRATE_MAX_TOKENS: u32 = 4000;

const NARRATE_PROMPT: &str = "Extract all text from this PDF and convert it into a conversational \
     narration suitable for audio reading. Describe any images you see. \
     Make it engaging and easy to follow.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrateRequest {
    pub pdf_base64: String,
}

#[derive(Debug, Serialize)]
pub struct NarrateResponse {
    pub success: bool,
    pub narration: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/narrate", post(narrate))
}

async fn narrate(
    State(state): State<AppState>,
    Json(request): Json<NarrateRequest>,
) -> Result<Json<NarrateResponse>> {
    pdf::decode_and_validate(&request.pdf_base64, state.config().upload.max_bytes)?;

    let narration = state
        .providers()
        .document
        .prompt_document(&request.pdf_base64, NARRATE_PROMPT, NARRATE_MAX_TOKENS)
        .await?;

    tracing::info!(narration_len = narration.len(), "Narration generated");

    Ok(Json(NarrateResponse {
        success: true,
        narration,
    }))
}
