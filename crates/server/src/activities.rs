use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use shared_types::{Activity, ActivitiesConfig};
use std::sync::OnceLock;
use std::time::Duration;

/// Best-effort client for the external activity feed.
///
/// Every failure (no endpoint, transport error, non-2xx status, body that
/// is not a JSON array of activities) is logged and reported as an empty
/// feed. No retries.
#[derive(Clone, Debug)]
pub struct ActivityClient {
    http: reqwest::Client,
    endpoint: Option<String>,
}

impl ActivityClient {
    pub fn new(config: &ActivitiesConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default http client");
                reqwest::Client::new()
            });
        Self {
            http,
            endpoint: config.endpoint.clone(),
        }
    }

    /// `{endpoint}?userId={user_id}`. Query pairs already on the endpoint
    /// are kept.
    pub fn url_for(&self, user_id: &str) -> Option<Url> {
        let mut url = Url::parse(self.endpoint.as_deref()?).ok()?;
        if url.cannot_be_a_base() {
            return None;
        }
        url.query_pairs_mut().append_pair("userId", user_id);
        Some(url)
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, user_id: &str) -> Vec<Activity> {
        let Some(url) = self.url_for(user_id) else {
            tracing::debug!("no usable activities endpoint configured");
            return Vec::new();
        };

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "activity feed request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "activity feed returned an error status");
            return Vec::new();
        }

        response.json::<Vec<Activity>>().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "activity feed body was not an activity list");
            Vec::new()
        })
    }
}

static CLIENT: OnceLock<ActivityClient> = OnceLock::new();

/// Client built from the loaded configuration.
pub fn client() -> &'static ActivityClient {
    CLIENT.get_or_init(|| ActivityClient::new(&crate::config::config().activities))
}

#[derive(Debug, serde::Deserialize)]
struct FeedQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

async fn sample_feed(Query(query): Query<FeedQuery>) -> Result<Json<Vec<Activity>>, StatusCode> {
    let user_id = query
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;
    Ok(Json(shared_types::metrics::sample_activities(
        &user_id,
        chrono::Utc::now(),
    )))
}

/// `GET /api/activities?userId=..` serving the sample feed.
pub fn activities_router() -> Router {
    Router::new().route("/api/activities", get(sample_feed))
}
