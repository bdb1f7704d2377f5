use thiserror::Error;

use super::model::EntryId;

#[derive(Debug, Error)]
/// Errors returned by entry-store operations.
pub enum StoreError {
    /// Network or service failure. Retryable by the user, never retried
    /// automatically for mutating operations.
    #[error("store transport failure: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// A record referenced by a transaction vanished before it committed.
    #[error("transaction aborted: record '{id}' no longer exists")]
    TransactionAborted {
        /// The missing record.
        id: EntryId,
    },

    /// A point read targeted a record that does not exist.
    #[error("record not found: {id}")]
    RecordNotFound {
        /// The missing record.
        id: EntryId,
    },

    /// The snapshot subscription was closed by the store.
    #[error("subscription closed by the store")]
    SubscriptionClosed,
}

impl StoreError {
    /// Returns `true` for failures worth surfacing as "try again".
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Transport { .. })
    }
}
