//! Chat-completion provider
//!
//! Wraps the OpenAI chat completions API for the dyslexia rewrite
//! pipeline. One best-effort call per request, no retry.

use async_trait::async_trait;
use serde_json::json;

use super::types::ProviderError;

/// Chat-completion provider trait
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one chat completion and return the assistant reply text.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, ProviderError>;
}

/// OpenAI chat completions provider
pub struct OpenAiChatProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatProvider {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "temperature": temperature,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::transport("openai", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: "openai",
                status,
                body,
            });
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed {
                provider: "openai",
                message: e.to_string(),
            })?;

        result["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ProviderError::Malformed {
                provider: "openai",
                message: "missing choices[0].message.content".to_string(),
            })
    }
}

/// Mock provider for testing
#[cfg(test)]
pub struct MockChatProvider {
    pub reply: String,
}

#[cfg(test)]
#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _temperature: f32,
    ) -> Result<String, ProviderError> {
        Ok(self.reply.clone())
    }
}
