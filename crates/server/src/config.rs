use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Overrides `[activities].endpoint` when set.
const ACTIVITIES_ENDPOINT_VAR: &str = "ACTIVITIES_ENDPOINT";

/// Parse the contents of `config.toml`. Invalid input yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "invalid config, using defaults");
        AppConfig::default()
    })
}

/// Apply environment overrides on top of a parsed config.
pub fn apply_env_overrides(mut config: AppConfig, activities_endpoint: Option<String>) -> AppConfig {
    if let Some(endpoint) = activities_endpoint.filter(|e| !e.trim().is_empty()) {
        config.activities.endpoint = Some(endpoint);
    }
    config
}

/// Read `config.toml` and the environment once and keep the result for
/// the life of the process. Later calls are no-ops.
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env_overrides(config, std::env::var(ACTIVITIES_ENDPOINT_VAR).ok());
        tracing::info!(features = ?config.features, activities = ?config.activities.endpoint, "configuration loaded");
        config
    });
}

/// The loaded configuration, or the defaults if `load_config` never ran.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_config_falls_back_to_defaults() {
        assert_eq!(parse_config("features = 12"), AppConfig::default());
    }

    #[test]
    fn env_override_replaces_endpoint() {
        let config = parse_config(
            r#"
            [activities]
            endpoint = "http://file.example/api"
            "#,
        );
        let config = apply_env_overrides(config, Some("http://env.example/api".into()));
        assert_eq!(config.activities.endpoint.as_deref(), Some("http://env.example/api"));
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let config = parse_config(
            r#"
            [activities]
            endpoint = "http://file.example/api"
            "#,
        );
        let config = apply_env_overrides(config, Some("  ".into()));
        assert_eq!(config.activities.endpoint.as_deref(), Some("http://file.example/api"));
    }
}
