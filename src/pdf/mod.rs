//! PDF validation and local text extraction
//!
//! Validation is uniform across every endpoint that accepts a document:
//! same size ceiling, same `%PDF-` magic check. Extraction itself is only
//! used by the dyslexia pipeline; every other mode hands the raw bytes to
//! a document-aware provider.

use base64::Engine;

use crate::error::{AppError, Result};

/// Magic bytes at the start of every PDF file
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Validate raw PDF bytes against the configured policy.
pub fn validate_pdf_bytes(bytes: &[u8], max_bytes: usize) -> Result<()> {
    if bytes.is_empty() {
        return Err(AppError::InvalidDocument("empty document".to_string()));
    }

    if bytes.len() > max_bytes {
        return Err(AppError::DocumentTooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }

    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::InvalidDocument(
            "not a PDF document".to_string(),
        ));
    }

    Ok(())
}

/// Decode a base64 document field and validate it as a PDF.
///
/// Returns the decoded bytes; callers that forward the document to a
/// provider keep using the original base64 string.
pub fn decode_and_validate(pdf_base64: &str, max_bytes: usize) -> Result<Vec<u8>> {
    if pdf_base64.is_empty() {
        return Err(AppError::BadRequest("No PDF provided".to_string()));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(pdf_base64)
        .map_err(|e| AppError::InvalidDocument(format!("invalid base64: {}", e)))?;

    validate_pdf_bytes(&bytes, max_bytes)?;
    Ok(bytes)
}

/// Extract raw text from PDF bytes.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::PdfExtract(e.to_string()))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::PdfExtract(
            "document contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}
