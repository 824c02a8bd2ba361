//! Storage trait definitions for the domain layer.
//!
//! Traits define the contract for session access; implementations live in
//! `crate::infrastructure::session`. Mock implementations are generated via
//! `mockall` for unit tests.

pub mod session_store;

pub use session_store::{SessionStore, StoreError, StoreResult};

#[cfg(test)]
pub use session_store::MockSessionStore;
