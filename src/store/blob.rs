//! Binary blob storage for entry images.
//!
//! Blob deletion is deliberately not transactional with record deletion; a
//! failed blob delete after a record delete leaves an orphan, which callers
//! tolerate (the blob is unreachable once the record is gone).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque reference to an uploaded blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobRef(String);

impl BlobRef {
    /// Wraps a storage path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the storage path.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlobRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
/// Errors returned by blob-store operations.
pub enum BlobError {
    /// Network or service failure.
    #[error("blob transport failure: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// No blob lives at the referenced path.
    #[error("blob not found: {path}")]
    NotFound {
        /// Storage path.
        path: String,
    },
}

#[async_trait]
/// Binary file storage consumed by entry upload and deletion.
pub trait BlobStore: Send + Sync {
    /// Uploads `bytes` to `path` and returns a reference to the stored blob.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<BlobRef, BlobError>;

    /// Resolves a blob reference to a fetchable URL.
    async fn url(&self, blob: &BlobRef) -> Result<String, BlobError>;

    /// Deletes the referenced blob.
    async fn delete(&self, blob: &BlobRef) -> Result<(), BlobError>;
}

#[cfg(any(test, feature = "mock"))]
pub use mock::MockBlobStore;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::{BlobError, BlobRef, BlobStore};

    #[derive(Clone)]
    struct StoredBlob {
        bytes: Vec<u8>,
        content_type: String,
    }

    /// In-memory blob store for tests and examples.
    #[derive(Default)]
    pub struct MockBlobStore {
        blobs: Mutex<HashMap<String, StoredBlob>>,
        fail_next_delete: AtomicBool,
    }

    impl MockBlobStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of blobs currently stored.
        pub fn blob_count(&self) -> usize {
            self.blobs.lock().len()
        }

        /// Returns `true` if a blob lives at `blob`'s path.
        pub fn contains(&self, blob: &BlobRef) -> bool {
            self.blobs.lock().contains_key(blob.path())
        }

        /// Returns the stored content type, if the blob exists.
        pub fn content_type(&self, blob: &BlobRef) -> Option<String> {
            self.blobs
                .lock()
                .get(blob.path())
                .map(|b| b.content_type.clone())
        }

        /// Makes the next `delete` call fail with a transport error.
        pub fn inject_delete_failure(&self) {
            self.fail_next_delete.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl BlobStore for MockBlobStore {
        async fn upload(
            &self,
            path: &str,
            bytes: Vec<u8>,
            content_type: &str,
        ) -> Result<BlobRef, BlobError> {
            self.blobs.lock().insert(
                path.to_string(),
                StoredBlob {
                    bytes,
                    content_type: content_type.to_string(),
                },
            );
            Ok(BlobRef::new(path))
        }

        async fn url(&self, blob: &BlobRef) -> Result<String, BlobError> {
            let blobs = self.blobs.lock();
            let stored = blobs.get(blob.path()).ok_or_else(|| BlobError::NotFound {
                path: blob.path().to_string(),
            })?;
            Ok(format!(
                "mock://{}?bytes={}",
                blob.path(),
                stored.bytes.len()
            ))
        }

        async fn delete(&self, blob: &BlobRef) -> Result<(), BlobError> {
            if self.fail_next_delete.swap(false, Ordering::SeqCst) {
                return Err(BlobError::Transport {
                    message: "injected delete failure".to_string(),
                });
            }

            self.blobs
                .lock()
                .remove(blob.path())
                .map(|_| ())
                .ok_or_else(|| BlobError::NotFound {
                    path: blob.path().to_string(),
                })
        }
    }
}
