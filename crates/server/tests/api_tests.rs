//! HTTP tests for the plain axum routes.
//!
//! Run with: `cargo test -p server --features server --test api_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{get, get_with_request_id};
use shared_types::{Activity, ActivityKind};

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get(server::router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn sample_feed_is_scoped_to_query_user() {
    let (status, body) = get(server::router(), "/api/activities?userId=u-77").await;

    assert_eq!(status, StatusCode::OK);
    let feed: Vec<Activity> = serde_json::from_str(&body).unwrap();
    assert!(!feed.is_empty());
    assert!(feed.iter().all(|a| a.user_id.as_deref() == Some("u-77")));
    assert!(feed.iter().any(|a| a.kind == ActivityKind::Commit));

    let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(raw[0]["userId"], "u-77");
    assert!(raw[0]["activityType"].is_string());
}

#[tokio::test]
async fn feed_without_user_is_rejected() {
    let (status, _) = get(server::router(), "/api/activities").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(server::router(), "/api/activities?userId=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn request_id_is_generated() {
    let (status, request_id) = get_with_request_id(server::router(), "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(request_id.is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn request_id_is_propagated() {
    let (_, request_id) =
        get_with_request_id(server::router(), "/health", Some("trace-me-123")).await;
    assert_eq!(request_id.as_deref(), Some("trace-me-123"));
}
