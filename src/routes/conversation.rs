//! Conversational Q&A route
//!
//! POST /api/conversation — answer a follow-up question about a narrated
//! document. The narration text rides along as context; prior turns are
//! replayed in order (the server keeps no conversation state).

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::providers::ChatMessage;
use crate::state::AppState;

const CONVERSATION_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    pub question: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub success: bool,
    pub answer: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/conversation", post(conversation))
}

fn build_messages(request: &ConversationRequest) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::user(format!(
        "You are a helpful AI assistant for visually impaired users. You \
         have access to the following document content:\n\n{}\n\nPlease \
         answer questions about this document in a clear, conversational \
         way suitable for audio playback. Keep responses concise and easy \
         to understand when spoken aloud.",
        request.context
    ))];

    messages.extend(request.conversation_history.iter().cloned());
    messages.push(ChatMessage::user(request.question.clone()));
    messages
}

async fn conversation(
    State(state): State<AppState>,
    Json(request): Json<ConversationRequest>,
) -> Result<Json<ConversationResponse>> {
    if request.question.trim().is_empty() {
        return Err(AppError::BadRequest("No question provided".to_string()));
    }

    let messages = build_messages(&request);

    let answer = state
        .providers()
        .document
        .converse(&messages, CONVERSATION_MAX_TOKENS)
        .await?;

    tracing::debug!(
        history_turns = request.conversation_history.len(),
        answer_len = answer.len(),
        "Conversation turn answered"
    );

    Ok(Json(ConversationResponse {
        success: true,
        answer,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Role;

    #[test]
    fn test_message_order() {
        let request = ConversationRequest {
            question: "what next?".to_string(),
            context: "the narration".to_string(),
            conversation_history: vec![
                ChatMessage::user("first question"),
                ChatMessage::assistant("first answer"),
            ],
        };

        let messages = build_messages(&request);
        assert_eq!(messages.len(), 4);
        assert!(messages[0].content.contains("the narration"));
        assert_eq!(messages[1].content, "first question");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[3].content, "what next?");
    }
}
