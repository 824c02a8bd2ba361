//! Website route configuration.

use crate::state::AppState;
use crate::web::handlers::login_handler;
use axum::{Router, routing::get};

/// Public website routes.
///
/// # Endpoints
///
/// - `GET /` - Landing page: login form, or redirect home for active sessions
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(login_handler))
}
