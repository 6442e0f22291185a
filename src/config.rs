//! Configuration management for the Lectura server

use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub providers: ProviderConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream AI/TTS provider settings.
///
/// Keys are read here at startup and attached to requests at call time.
/// An empty key is sent as-is, so a missing credential shows up as an
/// upstream authentication error rather than a local validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub openai_api_key: String,
    pub anthropic_api_key: String,
    pub openai_base_url: String,
    pub anthropic_base_url: String,
    pub openai_chat_model: String,
    pub openai_tts_model: String,
    pub anthropic_model: String,
    pub google_tts_lang: String,
}

/// Document validation policy, applied uniformly to every endpoint that
/// accepts a PDF (the original app enforced this in only one upload
/// surface; here it is an explicit configuration).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: usize,
}

/// Default ceiling: 10 MB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            providers: ProviderConfig {
                openai_api_key: String::new(),
                anthropic_api_key: String::new(),
                openai_base_url: "https://api.openai.com".to_string(),
                anthropic_base_url: "https://api.anthropic.com".to_string(),
                openai_chat_model: "gpt-3.5-turbo".to_string(),
                openai_tts_model: "tts-1".to_string(),
                anthropic_model: "claude-sonnet-4-20250514".to_string(),
                google_tts_lang: "en".to_string(),
            },
            upload: UploadConfig {
                max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        let defaults = Config::default();
        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            providers: ProviderConfig {
                openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
                anthropic_api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
                openai_base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or(defaults.providers.openai_base_url),
                anthropic_base_url: env::var("ANTHROPIC_BASE_URL")
                    .unwrap_or(defaults.providers.anthropic_base_url),
                openai_chat_model: env::var("OPENAI_CHAT_MODEL")
                    .unwrap_or(defaults.providers.openai_chat_model),
                openai_tts_model: env::var("OPENAI_TTS_MODEL")
                    .unwrap_or(defaults.providers.openai_tts_model),
                anthropic_model: env::var("ANTHROPIC_MODEL")
                    .unwrap_or(defaults.providers.anthropic_model),
                google_tts_lang: env::var("GOOGLE_TTS_LANG")
                    .unwrap_or(defaults.providers.google_tts_lang),
            },
            upload: UploadConfig {
                max_bytes: env::var("UPLOAD_MAX_BYTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
        assert_eq!(config.providers.openai_chat_model, "gpt-3.5-turbo");
    }
}
