//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use feedback_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Location of the feedback data file
    pub data_file: PathBuf,
    /// Keeps the data directory alive for the duration of the test
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application backed by a fresh temp directory
    pub fn new() -> Self {
        Self::with_token("1234")
    }

    /// Create a test application with a specific listing token
    pub fn with_token(token: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_file = dir.path().join("data").join("feedback.json");

        let mut config = AppConfig::default();
        config.storage.data_file = data_file.to_string_lossy().into_owned();
        config.auth.access_token = token.to_string();

        let router =
            feedback_api::build_router(feedback_api::AppState::from_config(config.clone()));

        Self {
            router,
            config,
            data_file,
            _dir: dir,
        }
    }

    /// Submit feedback and return the response
    pub async fn submit(&self, body: Value) -> TestResponse {
        self.request("POST", "/api/feedback", Some(body)).await
    }

    /// List feedback with the given query string (without the leading `?`)
    pub async fn list(&self, query: &str) -> TestResponse {
        self.request("GET", &format!("/api/feedback?{query}"), None)
            .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Raw contents of the data file
    pub fn data_file_contents(&self) -> String {
        std::fs::read_to_string(&self.data_file).expect("Failed to read data file")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
