//! Core domain entities.
//!
//! - [`SessionRecord`] - Authentication state of a client
//! - [`SessionStatus`] - Classification of a record at a point in time

pub mod session;

pub use session::{SessionRecord, SessionStatus};
