use pretty_assertions::assert_eq;
use server::activities::ActivityClient;

use crate::common;

#[tokio::test]
async fn fetches_the_sample_feed_over_http() {
    let addr = common::serve(server::routes()).await;
    let client = ActivityClient::new(&common::activities_config(Some(format!(
        "http://{addr}/api/activities"
    ))));

    let feed = client.fetch("u-42").await;
    assert!(!feed.is_empty());
    assert!(feed.iter().all(|a| a.user_id.as_deref() == Some("u-42")));
}

#[tokio::test]
async fn non_success_status_is_an_empty_feed() {
    let addr = common::serve(server::routes()).await;
    let client = ActivityClient::new(&common::activities_config(Some(format!(
        "http://{addr}/no-such-feed"
    ))));

    assert_eq!(client.fetch("u-42").await, Vec::new());
}

#[tokio::test]
async fn body_that_is_not_a_feed_is_an_empty_feed() {
    // `/health` answers 200 with an object, not an array.
    let addr = common::serve(server::routes()).await;
    let client = ActivityClient::new(&common::activities_config(Some(format!(
        "http://{addr}/health"
    ))));

    assert_eq!(client.fetch("u-42").await, Vec::new());
}

#[tokio::test]
async fn unreachable_endpoint_is_an_empty_feed() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ActivityClient::new(&common::activities_config(Some(format!(
        "http://{addr}/api/activities"
    ))));
    assert_eq!(client.fetch("u-1").await, Vec::new());
}

#[tokio::test]
async fn health_is_served_next_to_the_feed() {
    let addr = common::serve(server::router()).await;
    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
