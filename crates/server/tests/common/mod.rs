#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Send a GET request and return the status plus body text.
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_string(response).await)
}

/// Send a GET request, optionally with an `x-request-id`, and return the
/// status plus the `x-request-id` on the response.
pub async fn get_with_request_id(
    app: Router,
    uri: &str,
    request_id: Option<&str>,
) -> (StatusCode, Option<String>) {
    let mut builder = Request::builder().uri(uri);
    if let Some(id) = request_id {
        builder = builder.header("x-request-id", id);
    }
    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    (response.status(), id)
}
