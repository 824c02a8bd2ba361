//! Domain layer containing the session model and store contract.
//!
//! - [`entities`] - Session record and its expiry classification
//! - [`repositories`] - Session store trait implemented by infrastructure
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod repositories;
