use thiserror::Error;

use crate::store::{EntryId, StoreError};

#[derive(Debug, Error)]
/// Errors returned when recording a vote.
pub enum VoteError {
    /// Winner and loser are the same entry. Rejected before any I/O.
    #[error("cannot vote an entry against itself: {id}")]
    SelfMatch {
        /// The duplicated id.
        id: EntryId,
    },

    /// One side of the matchup was deleted before the transaction read it.
    /// Nothing was written; the caller should select a new pair.
    #[error("match no longer valid: entry '{id}' was removed")]
    StaleMatch {
        /// The vanished entry.
        id: EntryId,
    },

    /// The store failed for a reason other than a vanished record.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl VoteError {
    /// Returns `true` when a fresh pair selection is the right recovery.
    pub fn is_stale(&self) -> bool {
        matches!(self, VoteError::StaleMatch { .. })
    }

    /// Returns `true` for failures worth surfacing as "try again".
    ///
    /// A vote itself is never retried automatically; retrying would
    /// double-count intent.
    pub fn is_transient(&self) -> bool {
        matches!(self, VoteError::Store(e) if e.is_transient())
    }
}
