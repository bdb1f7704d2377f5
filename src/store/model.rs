use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::blob::BlobRef;
use super::identity::UserId;

/// Opaque record identifier assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wraps a store-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A persisted entry record.
///
/// Rating and matchmaking only ever read `id` and `rating`; the remaining
/// fields are carried for display and deletion gating. Field names follow the
/// document-store camelCase convention (pinned by a record-shape test).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Store-assigned identifier, immutable.
    pub id: EntryId,

    /// Current rating. Mutated only through [`transact`](super::EntryStore::transact).
    pub rating: i64,

    /// Store-assigned creation timestamp, immutable. Display ordering only.
    pub created_at: DateTime<Utc>,

    /// Display title.
    pub title: String,

    /// Display author name.
    pub author: String,

    /// Identity of the uploader, when one was signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,

    /// Reference to the uploaded image blob.
    #[serde(rename = "imageRef")]
    pub image: BlobRef,

    /// BLAKE3 hash of the deletion PIN.
    pub pin_hash: String,
}

/// Fields for a record about to be created.
///
/// The store assigns `id` and `createdAt`; everything else is caller-supplied
/// in a single atomic append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    /// Initial rating (normally [`Config::initial_rating`](crate::Config)).
    pub rating: i64,

    /// Display title.
    pub title: String,

    /// Display author name.
    pub author: String,

    /// Identity of the uploader, when one was signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,

    /// Reference to the uploaded image blob.
    #[serde(rename = "imageRef")]
    pub image: BlobRef,

    /// BLAKE3 hash of the deletion PIN.
    pub pin_hash: String,
}

/// A single rating mutation committed by a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingWrite {
    /// Record to update.
    pub id: EntryId,
    /// New rating value.
    pub rating: i64,
}
