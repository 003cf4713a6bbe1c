use serde::{Deserialize, Serialize};

/// Default timeout for the activity feed request.
pub const DEFAULT_ACTIVITIES_TIMEOUT_SECS: u64 = 5;

/// Optional features toggled from `config.toml`.
///
/// Every field defaults to `false`, so a missing or partial config file
/// leaves the optional features off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the "Continue with Google" button on the sign-in page.
    #[serde(default)]
    pub federated_sign_in: bool,
    /// Fetch and show the activity feed on the employee dashboard.
    #[serde(default)]
    pub activity_feed: bool,
    /// Show the unverified-email banner and resend action.
    #[serde(default)]
    pub email_verification: bool,
}

/// Where the activity feed comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivitiesConfig {
    /// Feed URL; the user id is sent as the `userId` query parameter.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_activities_timeout")]
    pub timeout_secs: u64,
}

fn default_activities_timeout() -> u64 {
    DEFAULT_ACTIVITIES_TIMEOUT_SECS
}

impl Default for ActivitiesConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_ACTIVITIES_TIMEOUT_SECS,
        }
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub activities: ActivitiesConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.activities.timeout_secs, 5);
        assert!(config.activities.endpoint.is_none());
    }

    #[test]
    fn partial_features_default_the_rest() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            activity_feed = true
            "#,
        )
        .unwrap();
        assert!(config.features.activity_feed);
        assert!(!config.features.federated_sign_in);
        assert!(!config.features.email_verification);
    }

    #[test]
    fn full_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            federated_sign_in = true
            activity_feed = true
            email_verification = true

            [activities]
            endpoint = "http://127.0.0.1:8080/api/activities"
            timeout_secs = 2
            "#,
        )
        .unwrap();
        assert!(config.features.federated_sign_in);
        assert!(config.features.email_verification);
        assert_eq!(
            config.activities.endpoint.as_deref(),
            Some("http://127.0.0.1:8080/api/activities")
        );
        assert_eq!(config.activities.timeout_secs, 2);
    }

    #[test]
    fn flags_from_empty_json() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
