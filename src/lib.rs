//! # Pathfinder Web
//!
//! Landing page of the Pathfinder website, built with Axum.
//!
//! Visitors with a valid session are redirected home; everyone else gets the
//! login form. Expired sessions are cleared on the way.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Session record and store trait
//! - **Application Layer** ([`application`]) - The session gate
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory session stores
//! - **API Layer** ([`api`]) - Health endpoint and shared middleware
//! - **Web Layer** ([`web`]) - Login page and session cookie extraction
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Decision, SessionGate};
    pub use crate::domain::entities::{SessionRecord, SessionStatus};
    pub use crate::domain::repositories::{SessionStore, StoreError};
    pub use crate::infrastructure::session::{MemorySessionStore, RedisSessionStore};
    pub use crate::state::{AppState, PageSettings};
}
