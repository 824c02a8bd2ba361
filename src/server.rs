//! HTTP server initialization and runtime setup.
//!
//! Handles session store setup, state wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::SessionStore;
use crate::infrastructure::session::{MemorySessionStore, RedisSessionStore};
use crate::routes::app_router;
use crate::state::{AppState, PageSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Session store (Redis, or in-memory fallback)
/// - Session gate and page settings
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let session_store = connect_session_store(&config).await;

    let state = AppState::new(
        session_store,
        config.home_path.clone(),
        PageSettings::from_config(&config),
    );

    let app = app_router(state, &config.assets_dir, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Picks the session backend from configuration.
///
/// An unreachable Redis is not fatal: the service starts with an empty
/// in-memory store, so every visitor sees the login form.
async fn connect_session_store(config: &Config) -> Arc<dyn SessionStore> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Session store: memory (Redis not configured)");
        return Arc::new(MemorySessionStore::new());
    };

    match RedisSessionStore::connect(redis_url, config.session_key_prefix.clone()).await {
        Ok(redis) => {
            tracing::info!("Session store: redis");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("{}. Falling back to in-memory sessions.", e);
            Arc::new(MemorySessionStore::new())
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
