//! Integration tests for feedback submission and listing.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use feedback_entity::FeedbackRecord;

fn valid_body() -> Value {
    json!({
        "name": "Al",
        "rating": 5,
        "comment": "Great service!",
    })
}

#[tokio::test]
async fn test_submit_success() {
    let app = helpers::TestApp::new();

    let response = app.submit(valid_body()).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["rating"], 5);
    assert_eq!(response.body["name"], "Al");
    assert_eq!(response.body["comment"], "Great service!");
    assert!(response.body["id"].as_str().is_some());
    assert!(
        response.body["createdAt"]
            .as_str()
            .is_some_and(|ts| ts.ends_with('Z'))
    );
}

#[tokio::test]
async fn test_submit_name_too_short() {
    let app = helpers::TestApp::new();

    let response = app
        .submit(json!({"name": "A", "rating": 5, "comment": "Great service!"}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_submit_rating_out_of_range() {
    let app = helpers::TestApp::new();

    let response = app
        .submit(json!({"name": "Al", "rating": 6, "comment": "Great service!"}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["rating"][0],
        "Rating cannot exceed 5"
    );
}

#[tokio::test]
async fn test_rejected_submission_is_not_persisted() {
    let app = helpers::TestApp::new();
    app.submit(valid_body()).await;

    for bad in [
        json!({"name": "A", "rating": 5, "comment": "Great service!"}),
        json!({"name": "Al", "rating": 0, "comment": "Great service!"}),
        json!({"name": "Al", "rating": 5, "comment": "Too short"}),
        json!({"name": "Al", "comment": "Great service!"}),
    ] {
        let response = app.submit(bad).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let listed = app.list("auth=1234").await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_list_returns_all_submissions() {
    let app = helpers::TestApp::new();

    let first = app.submit(valid_body()).await;
    let second = app
        .submit(json!({"name": "Bea", "rating": 3, "comment": "Decent, a bit slow."}))
        .await;

    let response = app.list("auth=1234").await;

    assert_eq!(response.status, StatusCode::OK);
    let records: Vec<FeedbackRecord> =
        serde_json::from_value(response.body).expect("list should be FeedbackRecord array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.as_str(), first.body["id"].as_str().unwrap());
    assert_eq!(records[1].id.as_str(), second.body["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_list_wrong_token() {
    let app = helpers::TestApp::new();
    app.submit(valid_body()).await;

    let response = app.list("auth=wrong").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
    assert!(response.body.get("details").is_none());
}

#[tokio::test]
async fn test_list_missing_token() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/feedback", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_configured_token_replaces_default() {
    let app = helpers::TestApp::with_token("s3cret");

    assert_eq!(app.list("auth=1234").await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.list("auth=s3cret").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_on_fresh_store_creates_empty_file() {
    let app = helpers::TestApp::new();

    let response = app.list("auth=1234").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
    assert_eq!(app.data_file_contents(), "[]");
}

#[tokio::test]
async fn test_list_sorted_by_date() {
    let app = helpers::TestApp::new();
    for name in ["First", "Second", "Third"] {
        let response = app
            .submit(json!({"name": name, "rating": 4, "comment": "Pretty good overall"}))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let desc = app.list("auth=1234&sort=desc").await;
    let names: Vec<&str> = desc
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    let mut created: Vec<&str> = desc
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["createdAt"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 3);
    let shown = created.clone();
    created.sort_by(|a, b| b.cmp(a));
    assert_eq!(shown, created);

    let asc = app.list("auth=1234&sort=asc").await;
    assert_eq!(asc.status, StatusCode::OK);
    assert_eq!(asc.body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_persisted_file_is_pretty_json_array() {
    let app = helpers::TestApp::new();
    let created = app.submit(valid_body()).await;

    let raw = app.data_file_contents();
    let on_disk: Vec<FeedbackRecord> = serde_json::from_str(&raw).unwrap();

    assert!(raw.contains("\n  "));
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].id.as_str(), created.body["id"].as_str().unwrap());
    assert_eq!(
        serde_json::to_value(&on_disk[0]).unwrap(),
        created.body,
        "response body and stored record must match"
    );
}

#[tokio::test]
async fn test_corrupt_file_yields_generic_500() {
    let app = helpers::TestApp::new();
    std::fs::create_dir_all(app.data_file.parent().unwrap()).unwrap();
    std::fs::write(&app.data_file, "not json at all").unwrap();

    let list = app.list("auth=1234").await;
    assert_eq!(list.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(list.body["error"], "Failed to read feedback");

    let submit = app.submit(valid_body()).await;
    assert_eq!(submit.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(submit.body["error"], "Failed to save feedback");

    assert_eq!(app.data_file_contents(), "not json at all");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_all_survive() {
    let app = std::sync::Arc::new(helpers::TestApp::new());

    let mut handles = Vec::new();
    for i in 0..10 {
        let app = std::sync::Arc::clone(&app);
        handles.push(tokio::spawn(async move {
            app.submit(json!({
                "name": format!("user-{i}"),
                "rating": 1 + (i % 5),
                "comment": "Concurrent feedback entry",
            }))
            .await
            .status
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let listed = app.list("auth=1234").await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(10));
}
