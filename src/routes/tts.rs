//! Text-to-speech routes
//!
//! GET /api/tts — split long text into segments and synthesize each one
//! through the free segment provider; segments come back base64-encoded
//! in order.
//!
//! POST /api/tts_adhd — synthesize one clip with a selectable voice
//! through the voice provider.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use base64::Engine;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::speech;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TtsQuery {
    pub text: String,
}

/// One synthesized segment: the text it covers plus its MP3 audio
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioChunk {
    pub short_text: String,
    pub base64: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsResponse {
    pub base64_chunks: Vec<AudioChunk>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceTtsRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default)]
    pub model: Option<String>,
}

fn default_voice() -> String {
    "alloy".to_string()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tts", get(chunked_tts))
        .route("/tts_adhd", post(voice_tts))
}

async fn chunked_tts(
    State(state): State<AppState>,
    Query(query): Query<TtsQuery>,
) -> Result<Json<TtsResponse>> {
    if query.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    let segments = speech::split_text(&query.text);

    // One provider call per segment, issued concurrently; try_join_all
    // keeps the results in segment order.
    let provider = state.providers().segment_tts.clone();
    let audio = try_join_all(
        segments
            .iter()
            .map(|segment| provider.synthesize_segment(segment)),
    )
    .await?;

    let base64_chunks = segments
        .into_iter()
        .zip(audio)
        .map(|(short_text, bytes)| AudioChunk {
            short_text,
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        })
        .collect::<Vec<_>>();

    tracing::debug!(segments = base64_chunks.len(), "Chunked TTS complete");

    Ok(Json(TtsResponse { base64_chunks }))
}

async fn voice_tts(
    State(state): State<AppState>,
    Json(request): Json<VoiceTtsRequest>,
) -> Result<Json<TtsResponse>> {
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    let model = request
        .model
        .unwrap_or_else(|| state.config().providers.openai_tts_model.clone());

    let bytes = state
        .providers()
        .voice_tts
        .synthesize(&request.text, &request.voice, &model)
        .await?;

    tracing::debug!(voice = %request.voice, bytes = bytes.len(), "Voice TTS complete");

    Ok(Json(TtsResponse {
        base64_chunks: vec![AudioChunk {
            short_text: request.text,
            base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }],
    }))
}
