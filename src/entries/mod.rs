//! Entry lifecycle: submission, removal, and the leaderboard view.
//!
//! Submission validates everything it can before touching the network, then
//! uploads the image blob and appends the record in one atomic create.
//! Removal follows the read-fresh / verify-secret / delete pattern; the blob
//! delete runs after the record delete and is allowed to fail (the orphan is
//! unreachable once the record is gone).

pub mod error;


pub use error::EntryError;

use tracing::{info, warn};
use uuid::Uuid;

use crate::context::AppContext;
use crate::hashing;
use crate::store::blob::BlobStore;
use crate::store::identity::IdentityProvider;
use crate::store::{Entry, EntryDraft, EntryId, EntryStore};

/// Caller-supplied fields for a new entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Display title. Must be non-empty after trimming.
    pub title: String,
    /// Display author name.
    pub author: String,
    /// Four-digit deletion PIN. Stored hashed, never in cleartext.
    pub pin: String,
    /// Raw image bytes.
    pub image_bytes: Vec<u8>,
    /// MIME type of the image.
    pub content_type: String,
}

/// Validates, uploads the image, and creates the entry record.
///
/// Validation happens before any I/O. An anonymous identity is issued when
/// nobody is signed in, and the record starts at the configured initial
/// rating.
pub async fn submit_entry(ctx: &AppContext, new_entry: NewEntry) -> Result<Entry, EntryError> {
    validate_pin(&new_entry.pin)?;
    let title = new_entry.title.trim();
    if title.is_empty() {
        return Err(EntryError::EmptyTitle);
    }

    let owner = match ctx.identity.current_identity().await? {
        Some(id) => id,
        None => ctx.identity.sign_in_anonymously().await?,
    };

    let blob_path = format!("{}/{}", ctx.config.blob_prefix, Uuid::new_v4());
    let image = ctx
        .blobs
        .upload(&blob_path, new_entry.image_bytes, &new_entry.content_type)
        .await?;

    let entry = ctx
        .entries
        .create(EntryDraft {
            rating: ctx.config.initial_rating,
            title: title.to_string(),
            author: new_entry.author.trim().to_string(),
            owner: Some(owner),
            image,
            pin_hash: hashing::hash_pin(&new_entry.pin),
        })
        .await?;

    info!(id = %entry.id, rating = entry.rating, "entry submitted");
    Ok(entry)
}

/// Verifies the PIN against a fresh read, then deletes record and blob.
///
/// The two deletes are sequential, not transactional: a blob failure after
/// the record delete leaves an orphaned blob, which is logged and tolerated.
pub async fn remove_entry(ctx: &AppContext, id: &EntryId, pin: &str) -> Result<(), EntryError> {
    validate_pin(pin)?;

    let entry = ctx
        .entries
        .get(id)
        .await?
        .ok_or_else(|| EntryError::NotFound { id: id.clone() })?;

    if !hashing::verify_pin(pin, &entry.pin_hash) {
        return Err(EntryError::PinMismatch);
    }

    ctx.entries.delete(id).await?;

    if let Err(e) = ctx.blobs.delete(&entry.image).await {
        warn!(%id, blob = %entry.image, error = %e, "orphaned blob after entry removal");
    }

    info!(%id, "entry removed");
    Ok(())
}

/// Ranks entries for the leaderboard: rating descending, older first on ties.
pub fn leaderboard(entries: &[Entry]) -> Vec<Entry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| {
        b.rating
            .cmp(&a.rating)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    ranked
}

fn validate_pin(pin: &str) -> Result<(), EntryError> {
    if hashing::is_valid_pin(pin) {
        Ok(())
    } else {
        Err(EntryError::InvalidPin {
            reason: "must be exactly four digits",
        })
    }
}
