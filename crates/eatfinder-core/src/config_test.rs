use std::collections::HashMap;

use super::*;

fn lookup_from<'a>(
    map: &'a HashMap<&'static str, &'static str>,
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|value| (*value).to_string())
            .ok_or(std::env::VarError::NotPresent)
    }
}

#[test]
fn empty_environment_yields_defaults() {
    let env = HashMap::new();
    let config = build_app_config(lookup_from(&env)).unwrap();
    assert_eq!(config.api_base_url, "https://uk.api.just-eat.io");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, 10);
    assert_eq!(config.user_agent, "eatfinder/0.1");
    assert_eq!(config.log_level, "info");
}

#[test]
fn env_vars_override_defaults() {
    let env = HashMap::from([
        ("EATFINDER_API_BASE_URL", "http://localhost:8080"),
        ("EATFINDER_REQUEST_TIMEOUT_SECS", "5"),
        ("EATFINDER_LOG_LEVEL", "debug"),
    ]);
    let config = build_app_config(lookup_from(&env)).unwrap();
    assert_eq!(config.api_base_url, "http://localhost:8080");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.log_level, "debug");
    // Untouched vars keep their defaults.
    assert_eq!(config.connect_timeout_secs, 10);
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let env = HashMap::from([("EATFINDER_REQUEST_TIMEOUT_SECS", "soon")]);
    let err = build_app_config(lookup_from(&env)).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "EATFINDER_REQUEST_TIMEOUT_SECS"),
        "unexpected error: {err:?}"
    );
}
