//! PDF text extraction route
//!
//! POST /api/parse (multipart) — extract raw text locally for the
//! dyslexia pipeline. This is the only endpoint that parses the PDF
//! itself; every other mode forwards the document to a provider.

use axum::{extract::Multipart, extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::pdf;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub text: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/parse", post(parse))
}

async fn parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>> {
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read file field: {}", e)))?;
            file_bytes = Some(bytes.to_vec());
        }
    }

    let bytes = file_bytes.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    pdf::validate_pdf_bytes(&bytes, state.config().upload.max_bytes)?;

    // Extraction is CPU-bound; keep it off the async workers
    let text = tokio::task::spawn_blocking(move || pdf::extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(format!("extraction task failed: {}", e)))??;

    tracing::info!(text_len = text.len(), "PDF text extracted");

    Ok(Json(ParseResponse { text }))
}
