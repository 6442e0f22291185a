//! Document-aware provider
//!
//! Wraps the Anthropic messages API. Two call shapes are used: a prompt
//! against an inline base64 PDF (narration, conversion, lesson
//! generation) and a plain multi-turn conversation (follow-up Q&A).

use async_trait::async_trait;
use serde_json::json;

use super::types::{ChatMessage, ProviderError};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Document-aware LLM provider trait
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// Send a base64-encoded PDF together with an instruction and return
    /// the reply text.
    async fn prompt_document(
        &self,
        pdf_base64: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError>;

    /// Run a plain conversation (no document block) and return the reply.
    async fn converse(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, ProviderError>;
}

/// Anthropic Claude messages provider
pub struct ClaudeProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ClaudeProvider {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    async fn send(&self, body: serde_json::Value) -> Result<String, ProviderError> {
        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::transport("anthropic", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: "anthropic",
                status,
                body,
            });
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed {
                provider: "anthropic",
                message: e.to_string(),
            })?;

        result["content"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ProviderError::Malformed {
                provider: "anthropic",
                message: "missing content[0].text".to_string(),
            })
    }
}

#[async_trait]
impl DocumentProvider for ClaudeProvider {
    async fn prompt_document(
        &self,
        pdf_base64: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "max_tokens": max_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "document",
                            "source": {
                                "type": "base64",
                                "media_type": "application/pdf",
                                "data": pdf_base64,
                            },
                        },
                        {
                            "type": "text",
                            "text": prompt,
                        },
                    ],
                },
            ],
        });

        self.send(body).await
    }

    async fn converse(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "max_tokens": max_tokens,
            "messages": messages,
        });

        self.send(body).await
    }
}
