use pretty_assertions::assert_eq;
use server::config::{apply_env_overrides, parse_config};

const SAMPLE: &str = include_str!("../../../config.toml");

#[test]
fn shipped_config_parses() {
    let config = parse_config(SAMPLE);
    assert_eq!(
        config.activities.endpoint.as_deref(),
        Some("http://127.0.0.1:8080/api/activities")
    );
    assert_eq!(config.activities.timeout_secs, 5);
}

#[test]
fn env_endpoint_wins_over_file() {
    let config = apply_env_overrides(
        parse_config(SAMPLE),
        Some("https://feed.internal/activities".into()),
    );
    assert_eq!(
        config.activities.endpoint.as_deref(),
        Some("https://feed.internal/activities")
    );
}

#[test]
fn flags_flow_through_unchanged_by_overrides() {
    let parsed = parse_config(
        r#"
        [features]
        federated_sign_in = true
        email_verification = true
        "#,
    );
    let config = apply_env_overrides(parsed.clone(), None);
    assert_eq!(config, parsed);
    assert!(config.features.federated_sign_in);
    assert!(!config.features.activity_feed);
}
