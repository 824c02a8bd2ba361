//! Application layer services.
//!
//! Services consume the domain store trait and give HTTP handlers a small
//! API to work with.
//!
//! - [`services::session_gate::SessionGate`] - Landing page session check

pub mod services;
