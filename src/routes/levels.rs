//! Dyslexia rewrite routes
//!
//! POST /api/levels (and its older alias /api/ai-process) — summarize
//! extracted text and rephrase it at a requested reading level via the
//! chat-completion provider.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::content::RewriteResult;
use crate::error::{AppError, Result};
use crate::state::AppState;

const REWRITE_TEMPERATURE: f32 = 0.5;

const REWRITE_SYSTEM_PROMPT: &str = "You are an assistant that helps summarize and rephrase text for people \
     with dyslexia. Always be clear and friendly. Output ONLY valid JSON \
     with two fields: summary and rephrased. For the rephrased version, \
     add newline characters after the end of a sentence.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    pub input_text: String,
    #[serde(default = "default_reading_level")]
    pub reading_level: String,
}

fn default_reading_level() -> String {
    "default".to_string()
}

#[derive(Debug, Serialize)]
pub struct RewriteResponse {
    pub summary: String,
    pub rephrased: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/levels", post(rewrite))
        .route("/ai-process", post(rewrite))
}

fn build_user_prompt(input_text: &str, reading_level: &str) -> String {
    let mut prompt = format!(
        "Here is some text:\n\n\"{}\"\n\nPlease return a JSON object like this:\n\
         {{\n  \"summary\": \"...\",\n  \"rephrased\": \"...\"\n}}\n\nSummarize it concisely.",
        input_text
    );

    if reading_level != "default" {
        prompt.push_str(&format!(
            "\n\nThen, rephrase the original text using a {} tone/reading level.",
            reading_level
        ));
    } else {
        prompt.push_str(
            "\n\nDo not rephrase the text. Just return an empty string for the \"rephrased\" field.",
        );
    }

    prompt
}

async fn rewrite(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>> {
    if request.input_text.trim().is_empty() {
        return Err(AppError::BadRequest("No input text provided".to_string()));
    }

    let user_prompt = build_user_prompt(&request.input_text, &request.reading_level);

    let raw = state
        .providers()
        .chat
        .complete(REWRITE_SYSTEM_PROMPT, &user_prompt, REWRITE_TEMPERATURE)
        .await?;

    let result = RewriteResult::from_provider_text(&raw)
        .map_err(|e| AppError::Decode(e.to_string()))?;

    tracing::debug!(
        reading_level = %request.reading_level,
        summary_len = result.summary.len(),
        rephrased_len = result.rephrased.len(),
        "Text rewritten"
    );

    Ok(Json(RewriteResponse {
        summary: result.summary,
        rephrased: result.rephrased,
    }))
}
