//! In-process session store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::SessionRecord;
use crate::domain::repositories::{SessionStore, StoreResult};

/// Session store backed by a map guarded by an async `RwLock`.
///
/// Used when Redis is not configured or unreachable at startup, and in
/// integration tests. Sessions live only as long as the process.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory session store");
        Self::default()
    }

    /// Creates a store pre-populated with `sessions`.
    pub fn with_sessions<I, T>(sessions: I) -> Self
    where
        I: IntoIterator<Item = (T, SessionRecord)>,
        T: Into<String>,
    {
        let sessions = sessions
            .into_iter()
            .map(|(token, record)| (token.into(), record))
            .collect();

        Self {
            sessions: RwLock::new(sessions),
        }
    }

    /// Number of tokens with a stored record, cleared or not.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no token has ever been stored.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, token: &str) -> StoreResult<Option<SessionRecord>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn clear(&self, token: &str) -> StoreResult<()> {
        if let Some(record) = self.sessions.write().await.get_mut(token) {
            record.clear();
        }
        Ok(())
    }

    async fn put(&self, token: &str, record: SessionRecord) -> StoreResult<()> {
        self.sessions
            .write()
            .await
            .insert(token.to_string(), record);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_token() {
        let store = MemorySessionStore::new();

        assert!(store.is_empty().await);
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemorySessionStore::new();
        let record = SessionRecord::authenticated("alice", 100);

        store.put("tok", record.clone()).await.unwrap();

        assert_eq!(store.get("tok").await.unwrap(), Some(record));
        assert_eq!(store.len().await, 1);
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn test_clear_keeps_token_but_drops_identity() {
        let store =
            MemorySessionStore::with_sessions([("tok", SessionRecord::authenticated("alice", 100))]);

        store.clear("tok").await.unwrap();

        assert_eq!(
            store.get("tok").await.unwrap(),
            Some(SessionRecord::anonymous())
        );
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store =
            MemorySessionStore::with_sessions([("tok", SessionRecord::authenticated("alice", 100))]);

        store.clear("tok").await.unwrap();
        store.clear("tok").await.unwrap();
        store.clear("never-existed").await.unwrap();

        assert_eq!(store.len().await, 1);
    }
}
