// tests/unit_config.rs
use genvet_core::config::Config;
use genvet_core::error::VetError;
use std::fs;
use tempfile::TempDir;

#[test]
fn defaults_are_sane() {
    let config = Config::default();
    assert_eq!(config.model, "gpt-4");
    assert_eq!(config.base_url, "https://api.openai.com/v1");
    assert_eq!(config.cache_capacity, 64);
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.base_delay_ms, 1000);
    assert_eq!(config.retry.backoff_multiplier, 2.0);
}

#[test]
fn full_toml_overrides_everything() {
    let config = Config::parse(
        r#"
model = "local-coder"
base_url = "http://localhost:8080/v1"
cache_capacity = 8

[retry]
max_attempts = 5
base_delay_ms = 250
backoff_multiplier = 1.5
"#,
    )
    .unwrap();

    assert_eq!(config.model, "local-coder");
    assert_eq!(config.base_url, "http://localhost:8080/v1");
    assert_eq!(config.cache_capacity, 8);
    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.retry.base_delay_ms, 250);
    assert_eq!(config.retry.backoff_multiplier, 1.5);
}

#[test]
fn partial_toml_keeps_defaults_elsewhere() {
    let config = Config::parse("model = \"gpt-4o\"\n").unwrap();
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.cache_capacity, 64);
    assert_eq!(config.retry.max_attempts, 3);
}

#[test]
fn partial_retry_table_keeps_other_retry_defaults() {
    let config = Config::parse("[retry]\nmax_attempts = 7\n").unwrap();
    assert_eq!(config.retry.max_attempts, 7);
    assert_eq!(config.retry.base_delay_ms, 1000);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let result = Config::parse("model = [not toml");
    assert!(matches!(result, Err(VetError::Config(_))));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("genvet.toml")).unwrap();
    assert_eq!(config.model, "gpt-4");
}

#[test]
fn load_from_reads_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("genvet.toml");
    fs::write(&path, "cache_capacity = 2\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.cache_capacity, 2);
}
