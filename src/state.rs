//! Application state management

use std::sync::Arc;

use crate::bridge::SessionBridge;
use crate::config::Config;
use crate::providers::{
    ChatProvider, ClaudeProvider, DocumentProvider, GoogleTtsProvider, OpenAiChatProvider,
    OpenAiTtsProvider, SegmentTtsProvider, VoiceTtsProvider,
};

/// The set of upstream providers the gateway routes against.
///
/// Held as trait objects so tests can swap in mocks.
#[derive(Clone)]
pub struct Providers {
    pub chat: Arc<dyn ChatProvider>,
    pub document: Arc<dyn DocumentProvider>,
    pub segment_tts: Arc<dyn SegmentTtsProvider>,
    pub voice_tts: Arc<dyn VoiceTtsProvider>,
}

impl Providers {
    /// Build the production providers from configuration, sharing one
    /// HTTP client.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();
        let p = &config.providers;

        Self {
            chat: Arc::new(OpenAiChatProvider::new(
                client.clone(),
                &p.openai_base_url,
                &p.openai_api_key,
                &p.openai_chat_model,
            )),
            document: Arc::new(ClaudeProvider::new(
                client.clone(),
                &p.anthropic_base_url,
                &p.anthropic_api_key,
                &p.anthropic_model,
            )),
            segment_tts: Arc::new(GoogleTtsProvider::new(client.clone(), &p.google_tts_lang)),
            voice_tts: Arc::new(OpenAiTtsProvider::new(
                client,
                &p.openai_base_url,
                &p.openai_api_key,
            )),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    providers: Providers,
    bridge: SessionBridge,
}

impl AppState {
    /// Create application state with production providers.
    pub fn new(config: Config) -> Self {
        let providers = Providers::from_config(&config);
        Self::with_providers(config, providers)
    }

    /// Create application state with explicit providers (test support).
    pub fn with_providers(config: Config, providers: Providers) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                providers,
                bridge: SessionBridge::new(),
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn providers(&self) -> &Providers {
        &self.inner.providers
    }

    pub fn bridge(&self) -> &SessionBridge {
        &self.inner.bridge
    }
}
