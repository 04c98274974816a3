//! The backend contract consumed by `BlobStorageManager`.
//!
//! A backend is a storage driver: Postgres, an object store, a
//! content-addressed network, or anything else that can persist and
//! return bytes. This crate specifies only the abstract contract —
//! concrete drivers are an external collaborator and are not shipped here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A storage backend's stable identity tag, drawn from a closed but
/// extensible enumeration. Adding a new backend kind means adding a
/// variant here and registering an implementation under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BackendName {
    /// A relational database backend (e.g. Postgres)
    Postgres,
    /// A cloud object store backend (e.g. Google Cloud Storage)
    Google,
    /// A decentralized content-addressed store (e.g. Swarm)
    Swarm,
}

impl fmt::Display for BackendName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendName::Postgres => "POSTGRES",
            BackendName::Google => "GOOGLE",
            BackendName::Swarm => "SWARM",
        };
        f.write_str(name)
    }
}

/// An opaque, backend-specific failure. The manager never inspects or
/// downcasts this error; it only renders the `Display` form verbatim into
/// its aggregate messages.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BackendError(pub String);

impl BackendError {
    /// Wrap any displayable cause as an opaque backend error
    pub fn new(cause: impl fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

/// Uniform capability every storage backend must provide.
///
/// Implementations must be internally thread-safe: a single `Backend`
/// instance is shared across concurrently fanned-out calls via `Arc`.
#[async_trait]
pub trait Backend: Send + Sync {
    /// This backend's stable name tag
    fn name(&self) -> BackendName;

    /// Persist `data` under `versioned_hash`, returning the opaque
    /// reference under which it can later be fetched from this backend.
    /// Re-stores of the same hash are treated as caller-intended; this
    /// method need not be idempotent.
    async fn store(&self, versioned_hash: &str, data: &[u8]) -> Result<String, BackendError>;

    /// Retrieve previously stored bytes by `reference`. Fails if the
    /// reference is absent or the backend is unavailable.
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, BackendError>;
}
