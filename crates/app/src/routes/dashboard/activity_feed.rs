use dioxus::prelude::*;
use shared_types::{Activity, ActivityKind, FeatureFlags};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Skeleton, StatCard};

use crate::auth::use_auth;

/// Per-kind totals for the activity stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityTally {
    pub meetings: usize,
    pub commits: usize,
    pub tasks: usize,
    pub total: usize,
}

impl ActivityTally {
    pub fn of(activities: &[Activity]) -> Self {
        activities.iter().fold(Self::default(), |mut acc, a| {
            match a.kind {
                ActivityKind::CalendarEvent => acc.meetings += 1,
                ActivityKind::Commit => acc.commits += 1,
                ActivityKind::Task => acc.tasks += 1,
                ActivityKind::Other => {}
            }
            acc.total += 1;
            acc
        })
    }
}

/// Snapshot of the signed-in user's activity feed for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFeed {
    pub enabled: bool,
    /// `None` until the first fetch settles.
    pub items: Option<Vec<Activity>>,
    pub tally: ActivityTally,
}

/// Fetches the current user's activities once per user id. Yields an empty
/// feed when the `activity_feed` flag is off or nobody is signed in; fetch
/// errors are logged and also yield an empty feed.
pub fn use_activity_feed() -> ActivityFeed {
    let flags: FeatureFlags = use_context();
    let auth = use_auth();
    let enabled = flags.activity_feed;

    let activities = use_resource(move || {
        let uid = auth.user.read().as_ref().map(|u| u.uid.clone()).unwrap_or_default();
        async move {
            if !enabled || uid.is_empty() {
                return Vec::new();
            }
            server::api::list_activities(uid).await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "activity feed unavailable");
                Vec::new()
            })
        }
    });

    let items = activities.read().clone();
    let tally = items.as_deref().map(ActivityTally::of).unwrap_or_default();
    ActivityFeed {
        enabled,
        items,
        tally,
    }
}

/// Total, meeting, commit and task counts. Renders nothing while the feed is off.
#[component]
pub fn ActivityStats(feed: ActivityFeed) -> Element {
    if !feed.enabled {
        return rsx! {};
    }
    let tally = feed.tally;

    rsx! {
        div { class: "stat-grid",
            StatCard {
                title: "Activities".to_string(),
                value: tally.total.to_string(),
                detail: "Across your connected tools".to_string(),
            }
            StatCard { title: "Meetings".to_string(), value: tally.meetings.to_string() }
            StatCard { title: "Commits".to_string(), value: tally.commits.to_string() }
            StatCard { title: "Task updates".to_string(), value: tally.tasks.to_string() }
        }
    }
}

#[component]
pub fn ActivityList(feed: ActivityFeed) -> Element {
    let now = chrono::Utc::now();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Recent activity" }
            }
            CardContent {
                if !feed.enabled {
                    p { class: "empty-state", "The activity feed is turned off." }
                } else {
                    match feed.items {
                        None => rsx! { Skeleton { lines: 4 } },
                        Some(items) if items.is_empty() => rsx! {
                            p { class: "empty-state", "No recent activity." }
                        },
                        Some(items) => rsx! {
                            ul { class: "activity-list",
                                for item in items {
                                    li { key: "{item.id}", class: "activity-item",
                                        Badge { variant: BadgeVariant::Secondary, {item.kind.label()} }
                                        div { class: "activity-body",
                                            span { class: "activity-title", "{item.title}" }
                                            if let Some(desc) = item.description.clone() {
                                                span { class: "activity-description", "{desc}" }
                                            }
                                        }
                                        span { class: "activity-time", {item.relative_time(now)} }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
