//! Infrastructure layer for external integrations.
//!
//! Provides concrete implementations of the interfaces defined by the domain
//! layer.
//!
//! # Modules
//!
//! - [`session`] - Session stores (Redis and in-memory)

pub mod session;
