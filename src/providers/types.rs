//! Provider Types
//!
//! Shared types for the upstream AI and TTS providers.

use serde::{Deserialize, Serialize};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single conversation turn sent to a chat-style provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Provider error types
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Failed to call {provider}: {message}")]
    Transport { provider: &'static str, message: String },

    #[error("{provider} returned {status}: {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Unexpected {provider} response shape: {message}")]
    Malformed { provider: &'static str, message: String },
}

impl ProviderError {
    pub fn transport(provider: &'static str, err: reqwest::Error) -> Self {
        Self::Transport {
            provider,
            message: err.to_string(),
        }
    }

    pub fn status_code(&self) -> axum::http::StatusCode {
        // Every upstream failure is surfaced as a 500 with the raw error
        // body, without classifying transient vs permanent.
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}
