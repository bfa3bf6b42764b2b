//! Integration tests for the health probe.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_before_any_write() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["storage"], "unavailable");
}

#[tokio::test]
async fn test_health_after_first_write() {
    let app = helpers::TestApp::new();
    app.submit(serde_json::json!({
        "name": "Al",
        "rating": 5,
        "comment": "Great service!",
    }))
    .await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["storage"], "available");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}
