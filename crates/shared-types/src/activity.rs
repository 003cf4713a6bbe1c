use serde::{Deserialize, Serialize};

/// What produced an activity feed entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Commit,
    CalendarEvent,
    Task,
    #[default]
    #[serde(other)]
    Other,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Commit => "Commit",
            ActivityKind::CalendarEvent => "Event",
            ActivityKind::Task => "Task",
            ActivityKind::Other => "Update",
        }
    }
}

/// One entry of the activity feed. The feed's source owns the schema,
/// so every field is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "activityType", alias = "type", alias = "kind")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// RFC 3339 timestamp as delivered by the feed.
    #[serde(default)]
    pub timestamp: String,
    #[serde(
        default,
        rename = "userId",
        alias = "user_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
}

impl Activity {
    /// Short relative time ("5m ago", "3d ago"), or the raw timestamp if it
    /// cannot be parsed.
    pub fn relative_time(&self, now: chrono::DateTime<chrono::Utc>) -> String {
        let Ok(at) = chrono::DateTime::parse_from_rfc3339(&self.timestamp) else {
            return self.timestamp.clone();
        };
        let secs = now.signed_duration_since(at).num_seconds();
        match secs {
            s if s < 60 => "just now".to_string(),
            s if s < 3_600 => format!("{}m ago", s / 60),
            s if s < 86_400 => format!("{}h ago", s / 3_600),
            s => format!("{}d ago", s / 86_400),
        }
    }
}
