//! Tests for environment-backed configuration.

use std::collections::HashMap;

use pubdoi_cli::config::{Config, ConfigError, DEFAULT_REGION, DEFAULT_REGISTRY_BASE_URL};

fn base_vars() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
        ("S3_BUCKET_NAME", "pubs-bucket"),
        ("DATACITE_REPOSITORY_ID", "demo.repo"),
        ("DATACITE_REPOSITORY_PASSWORD", "repo-pass"),
    ])
}

fn config_from(vars: &HashMap<&str, &str>) -> Result<Config, ConfigError> {
    Config::from_lookup(|name| vars.get(name).map(ToString::to_string))
}

#[test]
fn repository_password_signs_in_as_the_repository() {
    let config = config_from(&base_vars()).expect("config");
    assert_eq!(config.registry.username, "demo.repo");
    assert_eq!(config.registry.password, "repo-pass");
}

#[test]
fn account_credentials_used_when_repository_password_is_absent() {
    let mut vars = base_vars();
    vars.remove("DATACITE_REPOSITORY_PASSWORD");
    vars.insert("DATACITE_USERNAME", "alice@example.org");
    vars.insert("DATACITE_PASSWORD", "account-pass");
    let config = config_from(&vars).expect("config");
    assert_eq!(config.registry.username, "alice@example.org");
    assert_eq!(config.registry.password, "account-pass");
}

#[test]
fn region_and_base_url_have_defaults() {
    let config = config_from(&base_vars()).expect("config");
    assert_eq!(config.store.region, DEFAULT_REGION);
    assert_eq!(config.registry.base_url, DEFAULT_REGISTRY_BASE_URL);
}

#[test]
fn explicit_region_and_base_url_override_defaults() {
    let mut vars = base_vars();
    vars.insert("AWS_REGION", "eu-west-1");
    vars.insert("DATACITE_API_BASE_URL", "https://api.datacite.org");
    let config = config_from(&vars).expect("config");
    assert_eq!(config.store.region, "eu-west-1");
    assert_eq!(config.registry.base_url, "https://api.datacite.org");
}

#[test]
fn every_missing_variable_is_reported_at_once() {
    let err = config_from(&HashMap::new()).expect_err("should fail");
    let ConfigError::Missing(names) = err;
    assert!(names.contains(&"AWS_ACCESS_KEY_ID".to_string()));
    assert!(names.contains(&"AWS_SECRET_ACCESS_KEY".to_string()));
    assert!(names.contains(&"S3_BUCKET_NAME".to_string()));
    assert!(names.contains(&"DATACITE_REPOSITORY_ID".to_string()));
    assert_eq!(names.len(), 5);
}

#[test]
fn whitespace_only_values_count_as_missing() {
    let mut vars = base_vars();
    vars.insert("S3_BUCKET_NAME", "   ");
    let err = config_from(&vars).expect_err("should fail");
    let ConfigError::Missing(names) = err;
    assert_eq!(names, ["S3_BUCKET_NAME"]);
}

#[test]
fn missing_error_message_names_the_variables() {
    let err = ConfigError::Missing(vec![
        "S3_BUCKET_NAME".to_string(),
        "DATACITE_REPOSITORY_ID".to_string(),
    ]);
    assert_eq!(
        err.to_string(),
        "missing required environment variables: S3_BUCKET_NAME, DATACITE_REPOSITORY_ID"
    );
}
