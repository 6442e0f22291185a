//! Text-to-speech providers
//!
//! Two backends: the Google translate TTS endpoint (free, segment-sized
//! requests, used by the dyslexia reader) and the OpenAI speech API
//! (voice selection, used by the focus reader).

use async_trait::async_trait;
use serde_json::json;

use super::types::ProviderError;

/// Per-segment TTS provider trait
///
/// Callers split long text into segments first (see `speech::splitter`)
/// and request one audio clip per segment.
#[async_trait]
pub trait SegmentTtsProvider: Send + Sync {
    /// Synthesize one short text segment into MP3 bytes.
    async fn synthesize_segment(&self, text: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Single-clip voice TTS provider trait
#[async_trait]
pub trait VoiceTtsProvider: Send + Sync {
    /// Synthesize a full text into one MP3 clip with the given voice.
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        model: &str,
    ) -> Result<Vec<u8>, ProviderError>;
}

/// Google translate TTS provider
///
/// Uses the undocumented `translate_tts` endpoint; each request must stay
/// under 200 characters of text.
pub struct GoogleTtsProvider {
    client: reqwest::Client,
    lang: String,
}

impl GoogleTtsProvider {
    pub fn new(client: reqwest::Client, lang: &str) -> Self {
        Self {
            client,
            lang: lang.to_string(),
        }
    }
}

#[async_trait]
impl SegmentTtsProvider for GoogleTtsProvider {
    async fn synthesize_segment(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let url = format!(
            "https://translate.google.com/translate_tts?ie=UTF-8&q={}&tl={}&total=1&idx=0&textlen={}&client=tw-ob&prev=input",
            urlencoding::encode(text),
            self.lang,
            text.len(),
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::transport("google-tts", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: "google-tts",
                status,
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::transport("google-tts", e))?;

        Ok(bytes.to_vec())
    }
}

/// OpenAI speech synthesis provider
pub struct OpenAiTtsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiTtsProvider {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl VoiceTtsProvider for OpenAiTtsProvider {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        model: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}/v1/audio/speech", self.base_url);

        let request = json!({
            "model": model,
            "input": text,
            "voice": voice,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::transport("openai-tts", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                provider: "openai-tts",
                status,
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::transport("openai-tts", e))?;

        Ok(bytes.to_vec())
    }
}
