//! Integration tests for bootstrap configuration
//!
//! Covers the complete lifecycle: defaults, environment overrides,
//! validation, and serialization round-trips.

use blob_storage_manager::core::config::AppConfig;
use std::env;
use std::sync::Mutex;

// Serializes tests that mutate process environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[tokio::test]
async fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.chain_id, 1);
    assert_eq!(config.log_level, "info");
}

#[tokio::test]
async fn test_config_validation_success() {
    assert!(AppConfig::default().validate().is_ok());
}

#[tokio::test]
async fn test_config_validation_empty_log_level() {
    let config = AppConfig {
        log_level: "".to_string(),
        ..AppConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("log_level"));
}

#[tokio::test]
async fn test_environment_variable_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();

    let original_chain = env::var("BLOB_STORAGE_CHAIN_ID").ok();
    let original_log = env::var("BLOB_STORAGE_LOG_LEVEL").ok();
    let original_format = env::var("BLOB_STORAGE_LOG_FORMAT").ok();

    env::set_var("BLOB_STORAGE_CHAIN_ID", "99");
    env::set_var("BLOB_STORAGE_LOG_LEVEL", "trace");
    env::set_var("BLOB_STORAGE_LOG_FORMAT", "pretty");

    let config = AppConfig::load().await.unwrap();
    assert_eq!(config.chain_id, 99);
    assert_eq!(config.log_level, "trace");

    match original_chain {
        Some(v) => env::set_var("BLOB_STORAGE_CHAIN_ID", v),
        None => env::remove_var("BLOB_STORAGE_CHAIN_ID"),
    }
    match original_log {
        Some(v) => env::set_var("BLOB_STORAGE_LOG_LEVEL", v),
        None => env::remove_var("BLOB_STORAGE_LOG_LEVEL"),
    }
    match original_format {
        Some(v) => env::set_var("BLOB_STORAGE_LOG_FORMAT", v),
        None => env::remove_var("BLOB_STORAGE_LOG_FORMAT"),
    }
}

#[tokio::test]
async fn test_config_serialization_roundtrip() {
    let original = AppConfig {
        chain_id: 5,
        log_level: "debug".to_string(),
        ..AppConfig::default()
    };

    let yaml = serde_yaml::to_string(&original).unwrap();
    let loaded: AppConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(loaded.chain_id, original.chain_id);
    assert_eq!(loaded.log_level, original.log_level);
}
