//! In-memory document store for tests and examples.
//!
//! Records are held as JSON field maps keyed by id, the way a document store
//! sees them, so the serde wire shape of [`Entry`] is exercised on every
//! read and write. A single mutex spans each operation, which makes the
//! transaction trivially atomic; the published snapshot is rebuilt and pushed
//! after every mutation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use crate::constants::DEFAULT_ENTRIES_COLLECTION;

use super::error::StoreError;
use super::model::{Entry, EntryDraft, EntryId, RatingWrite};
use super::{EntryStore, EntrySubscription, TransactBody, TxAbort};

/// In-memory [`EntryStore`] with snapshot pushes and failure injection.
pub struct MockEntryStore {
    collection: String,
    records: Mutex<HashMap<EntryId, serde_json::Value>>,
    updates: watch::Sender<Vec<Entry>>,
    fail_next: AtomicBool,
}

impl Default for MockEntryStore {
    fn default() -> Self {
        Self::with_collection(DEFAULT_ENTRIES_COLLECTION)
    }
}

impl MockEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store scoped to `collection` (used only for log context).
    pub fn with_collection(collection: &str) -> Self {
        let (updates, _) = watch::channel(Vec::new());
        Self {
            collection: collection.to_string(),
            records: Mutex::new(HashMap::new()),
            updates,
            fail_next: AtomicBool::new(false),
        }
    }

    /// Number of live records.
    pub fn record_count(&self) -> usize {
        self.records.lock().len()
    }

    /// Makes the next store operation fail with a transport error.
    pub fn inject_transport_failure(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_transport(&self) -> Result<(), StoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Transport {
                message: "injected transport failure".to_string(),
            });
        }
        Ok(())
    }

    fn decode(id: &EntryId, value: &serde_json::Value) -> Result<Entry, StoreError> {
        serde_json::from_value(value.clone()).map_err(|e| StoreError::Transport {
            message: format!("malformed record '{id}': {e}"),
        })
    }

    /// Rebuilds the snapshot (newest-first) and pushes it to subscribers.
    fn publish(&self, records: &HashMap<EntryId, serde_json::Value>) {
        let mut snapshot: Vec<Entry> = records
            .iter()
            .filter_map(|(id, value)| match Self::decode(id, value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(collection = %self.collection, %id, error = %e, "skipping record");
                    None
                }
            })
            .collect();

        snapshot.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        self.updates.send_replace(snapshot);
    }
}

#[async_trait]
impl EntryStore for MockEntryStore {
    async fn subscribe(&self) -> Result<EntrySubscription, StoreError> {
        self.check_transport()?;
        Ok(EntrySubscription::new(self.updates.subscribe()))
    }

    async fn create(&self, draft: EntryDraft) -> Result<Entry, StoreError> {
        self.check_transport()?;

        let entry = Entry {
            id: EntryId::new(Uuid::new_v4().to_string()),
            rating: draft.rating,
            created_at: Utc::now(),
            title: draft.title,
            author: draft.author,
            owner: draft.owner,
            image: draft.image,
            pin_hash: draft.pin_hash,
        };

        let value = serde_json::to_value(&entry).map_err(|e| StoreError::Transport {
            message: format!("encode failed: {e}"),
        })?;

        let mut records = self.records.lock();
        records.insert(entry.id.clone(), value);
        debug!(collection = %self.collection, id = %entry.id, "record created");
        self.publish(&records);

        Ok(entry)
    }

    async fn get(&self, id: &EntryId) -> Result<Option<Entry>, StoreError> {
        self.check_transport()?;

        let records = self.records.lock();
        records
            .get(id)
            .map(|value| Self::decode(id, value))
            .transpose()
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        self.check_transport()?;

        let mut records = self.records.lock();
        if records.remove(id).is_some() {
            debug!(collection = %self.collection, %id, "record deleted");
            self.publish(&records);
        }
        Ok(())
    }

    async fn transact(
        &self,
        ids: &[EntryId],
        body: TransactBody<'_>,
    ) -> Result<Vec<RatingWrite>, StoreError> {
        self.check_transport()?;

        // One lock for the whole read-modify-write: reads are fresh and the
        // commit is all-or-nothing with respect to every other operation.
        let mut records = self.records.lock();

        let reads: Vec<Option<Entry>> = ids
            .iter()
            .map(|id| records.get(id).map(|v| Self::decode(id, v)).transpose())
            .collect::<Result<_, _>>()?;

        let writes = body(&reads).map_err(|abort| match abort {
            TxAbort::MissingRecord(id) => StoreError::TransactionAborted { id },
        })?;

        // Validate every write target before mutating anything.
        for write in &writes {
            if !records.contains_key(&write.id) {
                return Err(StoreError::TransactionAborted {
                    id: write.id.clone(),
                });
            }
        }

        for write in &writes {
            if let Some(value) = records.get_mut(&write.id) {
                value["rating"] = serde_json::Value::from(write.rating);
            }
        }

        debug!(
            collection = %self.collection,
            writes = writes.len(),
            "transaction committed"
        );
        self.publish(&records);

        Ok(writes)
    }
}
