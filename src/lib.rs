//! Blob Storage Manager - a coordination layer over heterogeneous blob storage backends
//!
//! This crate gives callers a single uniform interface over N independent
//! storage systems. A blob is considered successfully stored if any one
//! backend accepts it, and successfully retrieved if any one backend
//! returns it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Core architectural components: configuration, logging, correlation ids
pub mod core;
/// The storage module provides the blob storage manager and backend contract.
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::core::config::{AppConfig, ConfigError};
    pub use crate::core::correlation::CorrelationId;
    pub use crate::core::logging::{init_default_logging, init_logging, LogFormat, LoggingConfig};
    pub use crate::storage::backend::{Backend, BackendError, BackendName};
    pub use crate::storage::manager::{
        Blob, BlobReadDescriptor, BlobReference, BlobStorageManager, FetchedBlob, ManagerError,
        StoreError, StoreOptions, StoreResult,
    };
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Blob storage manager errors
    #[error("Storage error: {0}")]
    Storage(#[from] storage::manager::ManagerError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] core::config::ConfigError),

    /// Logging initialization errors
    #[error("Logging error: {0}")]
    Logging(#[from] core::logging::LoggingError),
}
