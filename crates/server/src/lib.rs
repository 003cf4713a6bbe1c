pub mod api;

#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod password;

#[cfg(feature = "server")]
pub mod identity;

#[cfg(feature = "server")]
pub mod activities;

/// Plain HTTP routes served next to the Dioxus app: `/health` and the
/// sample activity feed.
#[cfg(feature = "server")]
pub fn routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .merge(activities::activities_router())
}

/// [`routes`] with request tracing and request ids applied.
#[cfg(feature = "server")]
pub fn router() -> axum::Router {
    telemetry::with_request_tracing(routes())
}
