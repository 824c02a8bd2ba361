//! Session store backends.
//!
//! Implementations of [`crate::domain::repositories::SessionStore`]:
//! - [`RedisSessionStore`] - Production store shared with the login handler
//! - [`MemorySessionStore`] - In-process fallback and test backend

mod memory_store;
mod redis_store;

pub use memory_store::MemorySessionStore;
pub use redis_store::RedisSessionStore;
