//! Operational route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Operational routes, exempt from rate limiting.
///
/// # Endpoints
///
/// - `GET /health` - Session store health check
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
