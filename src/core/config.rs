//! Bootstrap configuration for an embedding application.
//!
//! This does not load backend credentials — wiring concrete `Backend`
//! instances into a `BlobStorageManager` is the caller's responsibility
//! (see the manager's own doc comments). It only covers the ambient
//! process-level settings every binary built on this crate needs: how to
//! log, and what default chain id to stamp onto a manager.
//!
//! Priority order:
//! 1. Environment variables
//! 2. Configuration file
//! 3. Built-in defaults

use crate::core::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;

/// Errors that can occur during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse the configuration file
    #[error("Failed to parse config: {0}")]
    ParseError(String),
    /// Configuration validation failed
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    /// I/O error occurred while reading configuration
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Bootstrap configuration for a process embedding a `BlobStorageManager`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default chain id stamped onto a manager built from this config
    #[serde(default = "default_chain_id")]
    pub chain_id: i64,
    /// Log level (e.g., "info", "debug", "warn", "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
    /// Optional path to a config file override; only used by `load`
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

fn default_chain_id() -> i64 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            config_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the cascade of sources
    pub async fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path = default_config_path();
        if config_path.exists() {
            let content = fs::read_to_string(&config_path).await?;
            let file_config: AppConfig = serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            config = config.merge(file_config);
        }

        if let Ok(chain_id) = env::var("BLOB_STORAGE_CHAIN_ID") {
            if let Ok(v) = chain_id.parse() {
                config.chain_id = v;
            }
        }
        if let Ok(log) = env::var("BLOB_STORAGE_LOG_LEVEL") {
            config.log_level = log;
        }
        if let Ok(format) = env::var("BLOB_STORAGE_LOG_FORMAT") {
            match format.to_lowercase().as_str() {
                "json" => config.log_format = LogFormat::Json,
                "pretty" => config.log_format = LogFormat::Pretty,
                "compact" => config.log_format = LogFormat::Compact,
                _ => {}
            }
        }

        Ok(config)
    }

    /// Validate the configuration, collecting every error rather than
    /// failing on the first one
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.log_level.trim().is_empty() {
            errors.push("log_level must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(errors.join("; ")))
        }
    }

    /// Merge another config into this one, preferring `other`'s values
    /// wherever they differ from the defaults
    fn merge(mut self, other: AppConfig) -> Self {
        if other.chain_id != default_chain_id() {
            self.chain_id = other.chain_id;
        }
        if other.log_level != default_log_level() {
            self.log_level = other.log_level;
        }
        self.log_format = other.log_format;
        self
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("blob-storage-manager")
        .join("config.yaml")
}
