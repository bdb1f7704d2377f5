use thiserror::Error;

use crate::store::blob::BlobError;
use crate::store::identity::IdentityError;
use crate::store::{EntryId, StoreError};

#[derive(Debug, Error)]
/// Errors returned by entry submission and removal.
pub enum EntryError {
    /// The PIN is not exactly four digits. Rejected before any I/O.
    #[error("invalid PIN: {reason}")]
    InvalidPin {
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The title is empty after trimming. Rejected before any I/O.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The supplied PIN does not match the stored hash.
    #[error("PIN does not match")]
    PinMismatch,

    /// The entry vanished before the operation could read it.
    #[error("entry not found: {id}")]
    NotFound {
        /// The missing entry.
        id: EntryId,
    },

    /// Record store failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Blob store failure.
    #[error("blob error: {0}")]
    Blob(#[from] BlobError),

    /// Identity service failure.
    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),
}
