mod common;

use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_memory_state();
    let server = common::create_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
    assert_eq!(
        json["checks"]["session_store"]["message"],
        "memory reachable"
    );
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let state = common::create_test_state(Arc::new(common::UnreachableStore));
    let server = common::create_server(state);

    let response = server.get("/health").expect_failure().await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["session_store"]["status"], "error");
}
