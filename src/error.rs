//! Error types for the Lectura server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::providers::ProviderError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Document too large: {size} bytes (max {max})")]
    DocumentTooLarge { size: usize, max: usize },

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Malformed provider output: {0}")]
    Decode(String),

    #[error("PDF extraction failed: {0}")]
    PdfExtract(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
///
/// Every failure leaving the handler boundary is converted into this
/// envelope; nothing is retried or escalated.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::InvalidDocument(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_document", msg.clone())
            }
            AppError::DocumentTooLarge { .. } => (
                StatusCode::BAD_REQUEST,
                "document_too_large",
                self.to_string(),
            ),
            AppError::Provider(e) => {
                tracing::error!("Provider error: {}", e);
                // The raw upstream error body is surfaced for diagnostics,
                // without classifying transient vs permanent failures.
                (StatusCode::INTERNAL_SERVER_ERROR, "provider_error", e.to_string())
            }
            AppError::Decode(msg) => {
                tracing::error!("Decode error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "decode_error",
                    format!("Could not parse provider output: {}", msg),
                )
            }
            AppError::PdfExtract(msg) => {
                tracing::error!("PDF extraction error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "pdf_error",
                    "Failed to extract text from PDF".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "io_error",
                    "IO error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}
