use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Mark process start; uptime is measured from the first call.
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    /// Which optional pieces are live, so a health check can tell a degraded
    /// feed from a broken one.
    pub activity_feed: bool,
    pub activities_endpoint: bool,
}

pub async fn health_check() -> Json<Health> {
    let config = crate::config::config();
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: STARTED.get().map_or(0, |t| t.elapsed().as_secs()),
        activity_feed: config.features.activity_feed,
        activities_endpoint: config.activities.endpoint.is_some(),
    })
}
