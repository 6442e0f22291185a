//! Upstream provider clients
//!
//! Every non-trivial capability of this server (summarization, narration,
//! question answering, speech synthesis) is delegated to an external
//! provider. Each trait here covers one upstream surface and has exactly
//! one production implementation; handlers make a single best-effort call
//! per request.

pub mod chat;
pub mod document;
pub mod tts;
pub mod types;

pub use chat::{ChatProvider, OpenAiChatProvider};
pub use document::{ClaudeProvider, DocumentProvider};
pub use tts::{GoogleTtsProvider, OpenAiTtsProvider, SegmentTtsProvider, VoiceTtsProvider};
pub use types::{ChatMessage, ProviderError, Role};
