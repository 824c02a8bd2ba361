//! Top-level router configuration combining website and operational routes.
//!
//! # Route Structure
//!
//! - `GET /`          - Landing page (login form or redirect home)
//! - `GET /health`    - Health check: session store
//! - `/assets/*`      - Static assets (background, logo)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the landing page
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `assets_dir` - directory served under `/assets`
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, assets_dir: &str, behind_proxy: bool) -> NormalizePath<Router> {
    let pages = web::routes::public_routes();
    let pages = if behind_proxy {
        pages.layer(rate_limit::proxied_layer())
    } else {
        pages.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(pages)
        .merge(api::routes::routes())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
