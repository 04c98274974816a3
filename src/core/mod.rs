//! Core architectural components: configuration, logging, and correlation ids.

pub mod config;
pub mod correlation;
pub mod logging;

pub use config::{AppConfig, ConfigError};
pub use correlation::CorrelationId;
pub use logging::{init_default_logging, init_logging, LogFormat, LoggingConfig, LoggingError};
