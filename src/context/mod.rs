//! Explicit application context.
//!
//! One [`AppContext`] is constructed at startup and passed to every component
//! that needs service access. There are no ambient singletons: the store,
//! blob, and identity handles all live here.

use std::sync::Arc;

use crate::config::Config;
use crate::store::EntryStore;
use crate::store::blob::BlobStore;
use crate::store::identity::IdentityProvider;

/// Service handles plus configuration, cheap to clone.
#[derive(Clone)]
pub struct AppContext {
    /// Active configuration.
    pub config: Config,

    /// Entry record store.
    pub entries: Arc<dyn EntryStore>,

    /// Image blob store.
    pub blobs: Arc<dyn BlobStore>,

    /// Identity issuance.
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppContext {
    /// Wires a context from explicit service handles.
    pub fn new(
        config: Config,
        entries: Arc<dyn EntryStore>,
        blobs: Arc<dyn BlobStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            config,
            entries,
            blobs,
            identity,
        }
    }

    /// Wires a context over the in-memory mocks with default configuration.
    #[cfg(any(test, feature = "mock"))]
    pub fn mock() -> Self {
        let config = Config::default();
        Self {
            entries: Arc::new(crate::store::mock::MockEntryStore::with_collection(
                &config.entries_collection,
            )),
            blobs: Arc::new(crate::store::blob::MockBlobStore::new()),
            identity: Arc::new(crate::store::identity::MockIdentityProvider::new()),
            config,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
