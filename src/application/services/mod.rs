//! Business logic services for the application layer.

pub mod session_gate;

pub use session_gate::{Decision, SessionGate};
