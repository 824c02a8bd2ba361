#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use pathfinder_web::api;
use pathfinder_web::domain::entities::SessionRecord;
use pathfinder_web::domain::repositories::{SessionStore, StoreError, StoreResult};
use axum::ServiceExt;
use axum::extract::Request;
use pathfinder_web::infrastructure::session::MemorySessionStore;
use pathfinder_web::routes::app_router;
use pathfinder_web::state::{AppState, PageSettings};
use pathfinder_web::web;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

pub const COOKIE: &str = "session_id";

/// Session store whose backend is down: every call fails.
pub struct UnreachableStore;

#[async_trait]
impl SessionStore for UnreachableStore {
    async fn get(&self, _token: &str) -> StoreResult<Option<SessionRecord>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn clear(&self, _token: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn put(&self, _token: &str, _record: SessionRecord) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

pub fn now() -> i64 {
    Utc::now().timestamp()
}

pub fn create_test_state(store: Arc<dyn SessionStore>) -> AppState {
    AppState::new(store, "home", PageSettings::default())
}

pub fn create_memory_state() -> (AppState, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    (create_test_state(store.clone()), store)
}

pub fn create_server(state: AppState) -> TestServer {
    let app = Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Serves the production router, middleware included, over a real socket.
///
/// The rate limiter keys on the peer address, so the app needs connect info,
/// which only the HTTP transport provides.
pub fn create_app_server(state: AppState, assets_dir: &Path, behind_proxy: bool) -> TestServer {
    let app = app_router(state, &assets_dir.to_string_lossy(), behind_proxy);
    let service = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app);

    TestServer::builder().http_transport().build(service).unwrap()
}

pub fn cookie(token: &str) -> String {
    format!("{}={}", COOKIE, token)
}
