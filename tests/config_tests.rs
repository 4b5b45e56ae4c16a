use gyeol_auction::config::{Config, ConfigError, DEFAULT_MODEL, DEFAULT_PORT};
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.gemini.model, DEFAULT_MODEL);
    assert_eq!(config.gemini.api_key, None);
    assert!(!config.rules.accept_late_bids);
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("GYEOL_BIND", "0.0.0.0"),
        ("GYEOL_PORT", "3000"),
        ("GEMINI_API_KEY", "secret"),
        ("GYEOL_ACCEPT_LATE_BIDS", "true"),
    ])
    .unwrap();

    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.gemini.api_key.as_deref(), Some("secret"));
    assert!(config.rules.accept_late_bids);
}

#[test]
fn test_api_key_takes_precedence() {
    let config = config_from(&[("API_KEY", "first"), ("GEMINI_API_KEY", "second")]).unwrap();
    assert_eq!(config.gemini.api_key.as_deref(), Some("first"));
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = config_from(&[("API_KEY", "  "), ("GYEOL_PORT", "")]).unwrap();
    assert_eq!(config.gemini.api_key, None);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn test_invalid_values_are_errors() {
    assert_eq!(
        config_from(&[("GYEOL_PORT", "eighty")]),
        Err(ConfigError::InvalidValue {
            key: "GYEOL_PORT",
            value: "eighty".to_string()
        })
    );
    assert!(config_from(&[("GYEOL_ACCEPT_LATE_BIDS", "sometimes")]).is_err());
}
