//! Store trait for client session records.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::SessionRecord;

/// Errors that can occur while talking to a session backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session store connection error: {0}")]
    Connection(String),

    #[error("Session store operation error: {0}")]
    Operation(String),

    #[error("Corrupt session record for {token}: {reason}")]
    Corrupt { token: String, reason: String },
}

/// Result type for session store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Access to session records keyed by the opaque token a client sends in
/// its session cookie.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::MemorySessionStore`] - In-process map
/// - [`crate::infrastructure::session::RedisSessionStore`] - Redis hashes
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the record for `token`.
    ///
    /// Returns `Ok(None)` when no session exists for the token.
    async fn get(&self, token: &str) -> StoreResult<Option<SessionRecord>>;

    /// Removes the identity and expiry from the session for `token`.
    ///
    /// Clearing an unknown or already cleared session is a no-op.
    async fn clear(&self, token: &str) -> StoreResult<()>;

    /// Writes `record` as the authentication state of `token`.
    ///
    /// Used by the login collaborator and operator tooling; the landing page
    /// never creates sessions.
    async fn put(&self, token: &str, record: SessionRecord) -> StoreResult<()>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
