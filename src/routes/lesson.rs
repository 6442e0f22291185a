//! Lesson generation route
//!
//! POST /api/generate-lesson — produce one structured lesson section for
//! the autism reader, keyed by a section index. Each call covers the
//! next slice of the document; the provider is non-deterministic, so
//! repeated calls for the same index may differ in wording.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::content::Lesson;
use crate::error::{AppError, Result};
use crate::pdf;
use crate::state::AppState;

const LESSON_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRequest {
    pub pdf_data: String,
    #[serde(default = "default_age")]
    pub age: String,
    #[serde(default)]
    pub section_number: u32,
}

fn default_age() -> String {
    "20".to_string()
}

#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub success: bool,
    pub json: Lesson,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate-lesson", post(generate_lesson))
}

fn build_lesson_prompt(age: &str, section_number: u32) -> String {
    format!(
        "You are preparing a lesson for an autistic learner aged {age}. \
         Divide this document into sequential sections of roughly equal \
         length and work ONLY on section {section} (0-indexed). Use calm, \
         literal, concrete language with no idioms or figures of speech.\n\n\
         Return ONLY valid JSON with exactly this shape:\n\
         {{\n\
           \"Summary\": [\"3-5 short bullet sentences\"],\n\
           \"Vocabulary\": [{{\"term\": \"...\", \"definition\": \"...\", \"example\": \"...\"}}],\n\
           \"Questions\": {{\n\
             \"trueFalse\": {{\"q\": \"...\", \"answer\": true, \"explain\": \"...\"}},\n\
             \"mcq\": {{\"q\": \"...\", \"options\": [\"...\"], \"answer\": \"...\", \"explain\": \"...\"}},\n\
             \"shortAnswer\": {{\"q\": \"...\", \"idealAnswer\": \"...\", \"rubric\": [\"...\"]}}\n\
           }},\n\
           \"Draw-it\": {{\"title\": \"...\", \"labels\": [\"...\"], \"caption\": \"...\"}},\n\
           \"Review Plan\": [{{\"when\": \"...\", \"minutes\": 10, \"plan\": [\"...\"]}}]\n\
         }}",
        age = age,
        section = section_number,
    )
}

async fn generate_lesson(
    State(state): State<AppState>,
    Json(request): Json<LessonRequest>,
) -> Result<Json<LessonResponse>> {
    pdf::decode_and_validate(&request.pdf_data, state.config().upload.max_bytes)?;

    let prompt = build_lesson_prompt(&request.age, request.section_number);

    let raw = state
        .providers()
        .document
        .prompt_document(&request.pdf_data, &prompt, LESSON_MAX_TOKENS)
        .await?;

    let lesson = Lesson::from_provider_text(&raw)
        .map_err(|e| AppError::Decode(format!("Could not parse lesson JSON: {}", e)))?;

    tracing::info!(
        section = request.section_number,
        vocabulary = lesson.vocabulary.len(),
        "Lesson section generated"
    );

    Ok(Json(LessonResponse {
        success: true,
        json: lesson,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_prompt_mentions_age_and_section() {
        let prompt = build_lesson_prompt("9", 2);
        assert!(prompt.contains("aged 9"));
        assert!(prompt.contains("section 2"));
        assert!(prompt.contains("\"Draw-it\""));
        assert!(prompt.contains("\"Review Plan\""));
    }
}
