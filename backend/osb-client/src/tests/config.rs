use crate::config::ClientConfiguration;
use crate::error::ConfigError;
use crate::version::ApiVersion;

use std::fs;

#[test]
fn given_default_configuration_when_validated_then_passes() {
    let configuration = ClientConfiguration::default();

    assert!(configuration.validate().is_ok());
    assert_eq!(configuration.api_version, ApiVersion::LATEST);
    assert!(!configuration.enable_alpha_features);
    assert_eq!(configuration.timeout_seconds, 60);
}

#[test]
fn given_zero_timeout_when_validated_then_fails() {
    let configuration = ClientConfiguration {
        timeout_seconds: 0,
        ..ClientConfiguration::default()
    };

    assert!(matches!(
        configuration.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_non_http_url_when_validated_then_fails() {
    for url in ["", "ftp://broker.example.com", "broker.example.com"] {
        let configuration = ClientConfiguration {
            url: url.to_string(),
            ..ClientConfiguration::default()
        };

        assert!(
            configuration.validate().is_err(),
            "URL {url:?} should fail validation"
        );
    }
}

/// **VALUE**: Verifies missing config files fall back to defaults.
///
/// **WHY THIS MATTERS**: First-run has no config file. Erroring instead of
/// defaulting would force every caller to special-case first launch.
#[test]
fn given_missing_file_when_loaded_then_returns_defaults() {
    let dir = tempfile::tempdir().expect("tempdir failed");

    let configuration =
        ClientConfiguration::load(&dir.path().join("missing.json")).expect("load failed");

    assert_eq!(configuration.url, ClientConfiguration::default().url);
}

#[test]
fn given_valid_file_when_loaded_then_fields_are_applied() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("broker.json");
    fs::write(
        &path,
        r#"{
            "name": "test-broker",
            "url": "https://broker.example.com",
            "api_version": "2.13",
            "enable_alpha_features": true
        }"#,
    )
    .expect("write failed");

    let configuration = ClientConfiguration::load(&path).expect("load failed");

    assert_eq!(configuration.name, "test-broker");
    assert_eq!(configuration.url, "https://broker.example.com");
    assert_eq!(configuration.api_version, ApiVersion::V2_13);
    assert!(configuration.enable_alpha_features);
    // Unspecified fields keep their defaults.
    assert_eq!(configuration.timeout_seconds, 60);
}

#[test]
fn given_corrupt_file_when_loaded_then_returns_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("broker.json");
    fs::write(&path, "{not json").expect("write failed");

    assert!(matches!(
        ClientConfiguration::load(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn given_file_with_unknown_api_version_when_loaded_then_returns_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("broker.json");
    fs::write(&path, r#"{"url": "http://b", "api_version": "9.9"}"#).expect("write failed");

    assert!(matches!(
        ClientConfiguration::load(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
