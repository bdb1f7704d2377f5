//! The external document-store seam.
//!
//! Everything durable lives behind [`EntryStore`]: record CRUD, the
//! snapshot subscription, and the atomic multi-record transaction that keeps
//! ratings consistent under concurrent voters. The trait is object-safe so an
//! [`AppContext`](crate::AppContext) can hold `Arc<dyn EntryStore>`.

pub mod blob;
pub mod error;
pub mod identity;
mod model;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::StoreError;
pub use model::{Entry, EntryDraft, EntryId, RatingWrite};

use async_trait::async_trait;
use futures_util::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Decision returned by a transaction body when it cannot proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxAbort {
    /// A referenced record no longer exists; nothing must be written.
    MissingRecord(EntryId),
}

/// Body of a [`transact`](EntryStore::transact) call.
///
/// Receives fresh in-transaction reads aligned with the requested ids
/// (`None` where a record is missing) and returns the rating writes to
/// commit. Stores with optimistic concurrency may invoke the body more than
/// once, so it must be a pure function of its reads.
pub type TransactBody<'a> =
    &'a (dyn Fn(&[Option<Entry>]) -> Result<Vec<RatingWrite>, TxAbort> + Send + Sync);

#[async_trait]
/// Record persistence consumed by voting, matchmaking, and entry lifecycle.
pub trait EntryStore: Send + Sync {
    /// Opens a snapshot subscription.
    ///
    /// The store pushes the full current entry list, ordered newest-first by
    /// creation time, on every change. The latest snapshot always supersedes
    /// prior ones; there is no incremental diff delivery. Dropping the
    /// returned handle unsubscribes.
    async fn subscribe(&self) -> Result<EntrySubscription, StoreError>;

    /// Creates a record in a single atomic append.
    ///
    /// The store assigns the id and creation timestamp and returns the
    /// complete record.
    async fn create(&self, draft: EntryDraft) -> Result<Entry, StoreError>;

    /// Reads one record fresh, bypassing any cached snapshot.
    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, StoreError>;

    /// Deletes one record. Deleting an absent record is not an error.
    async fn delete(&self, id: &EntryId) -> Result<(), StoreError>;

    /// Runs an atomic read-modify-write across `ids`.
    ///
    /// `body` sees fresh reads taken inside the transaction. Either every
    /// returned write commits or none does; a [`TxAbort`] surfaces as
    /// [`StoreError::TransactionAborted`] with nothing written. Returns the
    /// committed writes.
    async fn transact(
        &self,
        ids: &[EntryId],
        body: TransactBody<'_>,
    ) -> Result<Vec<RatingWrite>, StoreError>;
}

/// Cancellable handle to the entry-list subscription.
///
/// Wraps a latest-value channel: [`latest`](Self::latest) reads the current
/// snapshot, [`changed`](Self::changed) suspends until a newer one arrives.
/// Dropping the handle unsubscribes.
pub struct EntrySubscription {
    rx: watch::Receiver<Vec<Entry>>,
}

impl EntrySubscription {
    pub(crate) fn new(rx: watch::Receiver<Vec<Entry>>) -> Self {
        Self { rx }
    }

    /// Returns the most recently pushed snapshot.
    pub fn latest(&self) -> Vec<Entry> {
        self.rx.borrow().clone()
    }

    /// Suspends until a snapshot newer than the last observed one arrives.
    pub async fn changed(&mut self) -> Result<(), StoreError> {
        self.rx
            .changed()
            .await
            .map_err(|_| StoreError::SubscriptionClosed)
    }

    /// Adapts the subscription into a stream of snapshots.
    ///
    /// The current snapshot is yielded immediately, then one item per change.
    pub fn into_stream(self) -> impl Stream<Item = Vec<Entry>> {
        WatchStream::new(self.rx)
    }
}
