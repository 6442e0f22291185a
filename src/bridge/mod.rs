//! Session Bridge
//!
//! Hands converted content from the upload step to the reader without any
//! durable storage. Each browser tab owns one slot, keyed by a UUID token
//! it receives on first put; putting again with the same token overwrites
//! the slot. Slots expire after a fixed window and are pruned lazily.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::content::{Mode, ModeContent};

/// Slot expiry: 12 hours, the server-side analogue of tab lifetime
pub const SLOT_EXPIRY_HOURS: i64 = 12;

/// One bridged payload
#[derive(Debug, Clone)]
pub struct BridgeEntry {
    pub mode: Mode,
    pub content: ModeContent,
    pub stored_at: DateTime<Utc>,
}

impl BridgeEntry {
    fn is_expired(&self) -> bool {
        Utc::now() - self.stored_at > Duration::hours(SLOT_EXPIRY_HOURS)
    }
}

/// Tab-scoped single-slot content store
#[derive(Clone, Default)]
pub struct SessionBridge {
    slots: Arc<RwLock<HashMap<Uuid, BridgeEntry>>>,
}

impl SessionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store content, minting a token when none is supplied. A supplied
    /// token always overwrites its slot, matching one-active-document
    /// semantics.
    pub async fn put(&self, token: Option<Uuid>, content: ModeContent) -> Uuid {
        let token = token.unwrap_or_else(Uuid::new_v4);
        let entry = BridgeEntry {
            mode: content.mode(),
            content,
            stored_at: Utc::now(),
        };

        let mut slots = self.slots.write().await;
        slots.insert(token, entry);

        tracing::debug!(token = %token, "Bridged content stored");
        token
    }

    /// Fetch the slot for a token. Returns None for unknown or expired
    /// tokens; the reader treats that as a fatal precondition.
    pub async fn get(&self, token: Uuid) -> Option<BridgeEntry> {
        {
            let slots = self.slots.read().await;
            match slots.get(&token) {
                Some(entry) if !entry.is_expired() => return Some(entry.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: prune under the write lock
        let mut slots = self.slots.write().await;
        slots.remove(&token);
        None
    }

    /// Drop a slot.
    pub async fn clear(&self, token: Uuid) -> bool {
        let mut slots = self.slots.write().await;
        slots.remove(&token).is_some()
    }

    /// Number of live slots (test support).
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adhd_content(chunks: &[&str]) -> ModeContent {
        ModeContent::Adhd {
            chunks: chunks.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let bridge = SessionBridge::new();
        let token = bridge.put(None, adhd_content(&["a", "b"])).await;

        let entry = bridge.get(token).await.unwrap();
        assert_eq!(entry.mode, Mode::Adhd);
        match entry.content {
            ModeContent::Adhd { chunks } => assert_eq!(chunks.len(), 2),
            other => panic!("wrong variant: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_put_overwrites_slot() {
        let bridge = SessionBridge::new();
        let token = bridge.put(None, adhd_content(&["old"])).await;

        let same = bridge
            .put(
                Some(token),
                ModeContent::Blindness {
                    narration: "new".to_string(),
                },
            )
            .await;
        assert_eq!(same, token);
        assert_eq!(bridge.len().await, 1);

        let entry = bridge.get(token).await.unwrap();
        assert_eq!(entry.mode, Mode::Blindness);
    }

    #[tokio::test]
    async fn test_missing_token() {
        let bridge = SessionBridge::new();
        assert!(bridge.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_slot_is_pruned() {
        let bridge = SessionBridge::new();
        let token = bridge.put(None, adhd_content(&["x"])).await;

        {
            let mut slots = bridge.slots.write().await;
            slots.get_mut(&token).unwrap().stored_at =
                Utc::now() - Duration::hours(SLOT_EXPIRY_HOURS + 1);
        }

        assert!(bridge.get(token).await.is_none());
        assert!(bridge.is_empty().await);
    }

    #[tokio::test]
    async fn test_clear() {
        let bridge = SessionBridge::new();
        let token = bridge.put(None, adhd_content(&["x"])).await;
        assert!(bridge.clear(token).await);
        assert!(!bridge.clear(token).await);
    }
}
