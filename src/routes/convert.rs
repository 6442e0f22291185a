//! Focus-mode conversion route
//!
//! POST /api/convert — turn an uploaded PDF into focus-sized chunks.
//! The document goes to the document-aware provider as inline base64;
//! its markdown reply is split locally.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::content::chunker;
use crate::content::Mode;
use crate::error::{AppError, Result};
use crate::pdf;
use crate::state::AppState;

const CONVERT_MAX_TOKENS: u32 = 4000;

const CONVERT_PROMPT: &str = "Convert this PDF into clear, engaging markdown for a reader who \
     works best with short, focused sections. Break the content into \
     logical sections, each starting with a '## ' heading. Keep every \
     section self-contained and roughly two to four paragraphs long. \
     Preserve all the document's information; do not summarize it away.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub pdf_base64: String,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub mode: Mode,
    pub chunks: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/convert", post(convert))
}

async fn convert(
    State(state): State<AppState>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>> {
    let mode = match request.mode.as_deref() {
        None | Some("") => Mode::Adhd,
        Some(raw) => raw.parse().map_err(AppError::BadRequest)?,
    };

    // Uniform document policy: decoded size ceiling + PDF magic
    pdf::decode_and_validate(&request.pdf_base64, state.config().upload.max_bytes)?;

    let markdown = state
        .providers()
        .document
        .prompt_document(&request.pdf_base64, CONVERT_PROMPT, CONVERT_MAX_TOKENS)
        .await?;

    let chunks = chunker::split_into_chunks(&markdown);
    if chunks.is_empty() {
        return Err(AppError::Decode(
            "provider returned no usable content".to_string(),
        ));
    }

    tracing::info!(mode = mode.as_str(), chunks = chunks.len(), "Document converted");

    Ok(Json(ConvertResponse {
        success: true,
        mode,
        chunks,
    }))
}
