//! Dyslexia rewrite result

use serde::{Deserialize, Serialize};

use super::decode;

/// Summary plus reading-level rewrite returned by the chat provider.
///
/// Fields default to empty strings so that a partially shaped reply still
/// decodes (the original pipeline silently fell back to defaults here).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteResult {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub rephrased: String,
}

impl RewriteResult {
    /// Decode a rewrite result from raw provider text.
    pub fn from_provider_text(raw: &str) -> Result<Self, serde_json::Error> {
        decode::from_provider_text(raw)
    }
}
