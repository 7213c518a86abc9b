use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "LUNCHROLL_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.api_key.is_none());
    assert_eq!(cfg.base_url.as_str(), DEFAULT_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "lunchroll/0.1 (restaurant-picker)");
    assert_eq!(cfg.page_delay_secs, 5);
    assert!(cfg.language.is_none());
}

#[test]
fn build_app_config_reads_api_key_and_language() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_API_KEY", "secret-key");
    map.insert("LUNCHROLL_LANGUAGE", "sv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_key.as_deref(), Some("secret-key"));
    assert_eq!(cfg.language.as_deref(), Some("sv"));
}

#[test]
fn build_app_config_treats_blank_api_key_as_absent() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.api_key.is_none());
}

#[test]
fn build_app_config_normalises_base_url_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_BASE_URL", "http://127.0.0.1:8080/maps/api");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:8080/maps/api/");
}

#[test]
fn build_app_config_rejects_invalid_base_url() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_BASE_URL", "not a url");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LUNCHROLL_BASE_URL"),
        "expected InvalidEnvVar(LUNCHROLL_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LUNCHROLL_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LUNCHROLL_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_page_delay_override() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_PAGE_DELAY_SECS", "8");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_delay_secs, 8);
}

#[test]
fn build_app_config_rejects_page_delay_below_token_window() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_PAGE_DELAY_SECS", "2");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LUNCHROLL_PAGE_DELAY_SECS"),
        "expected InvalidEnvVar(LUNCHROLL_PAGE_DELAY_SECS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn with_api_key_override_replaces_env_value() {
    let mut map = HashMap::new();
    map.insert("LUNCHROLL_API_KEY", "from-env");
    let cfg = build_app_config(lookup_from_map(&map))
        .unwrap()
        .with_api_key(Some("from-flag".to_string()));
    assert_eq!(cfg.api_key.as_deref(), Some("from-flag"));

    let cfg = cfg.with_api_key(None);
    assert_eq!(cfg.api_key.as_deref(), Some("from-flag"));
}
