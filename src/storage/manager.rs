//! The blob storage manager: fans out reads and writes across a fixed set
//! of storage backends.
//!
//! Writes go to every target concurrently and succeed if at least one
//! backend accepts the blob; partial failures are reported, not swallowed.
//! Reads race every candidate backend and return the first success,
//! minimizing latency rather than durability.

use crate::core::correlation::CorrelationId;
use crate::storage::backend::{Backend, BackendName};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// An opaque binary payload identified externally by a versioned hash.
#[derive(Debug, Clone)]
pub struct Blob {
    /// Caller-supplied content identifier, treated opaquely by the manager
    pub versioned_hash: String,
    /// The payload bytes
    pub data: Vec<u8>,
}

/// A backend-specific opaque handle returned by a successful store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobReference {
    /// Which backend this reference belongs to
    pub storage: BackendName,
    /// The backend-defined reference string
    pub reference: String,
}

/// Names a backend and a reference within it, as input to `get_blob`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobReadDescriptor {
    /// Which backend to read from
    pub storage: BackendName,
    /// The reference to fetch
    pub reference: String,
}

/// One failed backend attempt, with its error preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// Which backend failed
    pub storage: BackendName,
    /// The backend's error, rendered to its `Display` form
    pub cause: String,
}

/// Options recognized by `store_blob`.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Restrict fan-out to this subset of backends. Absence means "all
    /// registered backends".
    pub selected_storages: Option<Vec<BackendName>>,
}

/// The aggregate outcome of a write fan-out.
#[derive(Debug, Clone)]
pub struct StoreResult {
    /// One entry per backend that accepted the blob
    pub references: Vec<BlobReference>,
    /// One entry per backend that failed; always a normal, non-failing
    /// return alongside at least one success
    pub errors: Vec<StoreError>,
}

/// A successful read: which backend answered, and the bytes it returned.
#[derive(Debug, Clone)]
pub struct FetchedBlob {
    /// The backend that served the blob
    pub storage: BackendName,
    /// The blob's bytes
    pub data: Vec<u8>,
}

/// Errors raised by `BlobStorageManager`.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    /// Construction was attempted with no backends
    #[error("No blob storages provided")]
    NoBackendsConfigured,

    /// `store_blob` was called with a selection naming unregistered backends
    #[error("Some of the selected storages are not available: {0}")]
    SelectedBackendsUnavailable(String),

    /// Every read attempt failed (or every descriptor named an unknown backend)
    #[error("Failed to get blob from any of the storages: {0}")]
    AllReadsFailed(String),

    /// Every write attempt failed
    #[error("Failed to upload blob {hash} to any of the storages: {detail}")]
    AllWritesFailed {
        /// The blob's versioned hash
        hash: String,
        /// Per-backend failure detail, joined by ", "
        detail: String,
    },
}

/// Dispatches blob reads and writes across a fixed collection of storage
/// backends.
///
/// The backend set is fixed at construction — there is no dynamic
/// add/remove. The manager itself holds no other mutable state; each call
/// is independent.
pub struct BlobStorageManager {
    backends: HashMap<BackendName, Arc<dyn Backend>>,
    chain_id: i64,
}

impl BlobStorageManager {
    /// Construct a manager over `backends`. Fails if `backends` is empty.
    pub fn new(
        backends: HashMap<BackendName, Arc<dyn Backend>>,
        chain_id: i64,
    ) -> Result<Self, ManagerError> {
        if backends.is_empty() {
            return Err(ManagerError::NoBackendsConfigured);
        }
        Ok(Self { backends, chain_id })
    }

    /// The opaque chain id this manager was constructed with.
    pub fn chain_id(&self) -> i64 {
        self.chain_id
    }

    /// Look up the backend registered under `name`, if any. Not an error
    /// to miss — this is a lookup primitive.
    pub fn get_storage(&self, name: BackendName) -> Option<Arc<dyn Backend>> {
        self.backends.get(&name).cloned()
    }

    /// Read fan-out with first-success semantics.
    ///
    /// Descriptors naming a backend this manager doesn't have are silently
    /// skipped — not attributable to the manager — but still contribute a
    /// `File not found` entry to the aggregate error if nothing succeeds.
    #[instrument(skip(self, descriptors), fields(correlation_id = %CorrelationId::new()))]
    pub async fn get_blob(
        &self,
        descriptors: Vec<BlobReadDescriptor>,
    ) -> Result<FetchedBlob, ManagerError> {
        let mut failures: Vec<(BackendName, String)> = Vec::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut inflight = 0usize;

        for descriptor in descriptors {
            match self.backends.get(&descriptor.storage).cloned() {
                Some(backend) => {
                    inflight += 1;
                    let tx = tx.clone();
                    let reference = descriptor.reference;
                    let storage = descriptor.storage;
                    tokio::spawn(async move {
                        let result = backend.fetch(&reference).await;
                        // Receiver may already be gone if an earlier task won the race.
                        let _ = tx.send((storage, result));
                    });
                }
                None => {
                    warn!(storage = %descriptor.storage, "read descriptor names an unregistered backend");
                    failures.push((descriptor.storage, "File not found".to_string()));
                }
            }
        }
        drop(tx);

        for _ in 0..inflight {
            let Some((storage, result)) = rx.recv().await else {
                break;
            };
            match result {
                Ok(data) => {
                    debug!(storage = %storage, "blob fetch succeeded");
                    return Ok(FetchedBlob { storage, data });
                }
                Err(e) => failures.push((storage, e.to_string())),
            }
        }

        let detail = failures
            .iter()
            .map(|(name, err)| format!("{} - {}", name, err))
            .collect::<Vec<_>>()
            .join(", ");
        Err(ManagerError::AllReadsFailed(detail))
    }

    /// Write fan-out with all-success aggregation and at-least-one-success
    /// requirement.
    ///
    /// If `options.selected_storages` names any backend this manager
    /// doesn't have, no write is attempted and `SelectedBackendsUnavailable`
    /// is returned.
    #[instrument(skip(self, blob, options), fields(correlation_id = %CorrelationId::new(), versioned_hash = %blob.versioned_hash))]
    pub async fn store_blob(
        &self,
        blob: Blob,
        options: Option<StoreOptions>,
    ) -> Result<StoreResult, ManagerError> {
        let targets: Vec<BackendName> = match options.and_then(|o| o.selected_storages) {
            Some(selected) => {
                let missing: Vec<String> = selected
                    .iter()
                    .filter(|name| !self.backends.contains_key(name))
                    .map(|name| name.to_string())
                    .collect();
                if !missing.is_empty() {
                    return Err(ManagerError::SelectedBackendsUnavailable(
                        missing.join(", "),
                    ));
                }
                selected
            }
            None => self.backends.keys().copied().collect(),
        };

        let mut handles = Vec::with_capacity(targets.len());
        for name in targets {
            let backend = self
                .backends
                .get(&name)
                .cloned()
                .expect("target was validated against the registered backend set above");
            let hash = blob.versioned_hash.clone();
            let data = blob.data.clone();
            handles.push(tokio::spawn(async move {
                let result = backend.store(&hash, &data).await;
                (name, result)
            }));
        }

        let mut references = Vec::new();
        let mut errors = Vec::new();
        for handle in handles {
            let (storage, result) = handle.await.expect("backend store task panicked");
            match result {
                Ok(reference) => references.push(BlobReference { storage, reference }),
                Err(e) => {
                    warn!(storage = %storage, error = %e, "backend store failed");
                    errors.push(StoreError {
                        storage,
                        cause: e.to_string(),
                    });
                }
            }
        }

        if references.is_empty() {
            let detail = errors
                .iter()
                .map(|e| format!("{}: {}", e.storage, e.cause))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ManagerError::AllWritesFailed {
                hash: blob.versioned_hash,
                detail,
            });
        }

        Ok(StoreResult { references, errors })
    }
}
