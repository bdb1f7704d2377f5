//! Duelboard library crate: the core of a pairwise voting board.
//!
//! Entries face off two at a time; each vote updates both ELO ratings inside
//! one store transaction, and a live leaderboard falls out of the ratings.
//! Persistence, blobs, and identity are external services reached through
//! the traits in [`store`]; this crate carries the rating math, matchup
//! selection, and the consistency contract around concurrent votes.
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//! - [`AppContext`] - Explicit service context, no ambient singletons
//! - [`Entry`], [`EntryDraft`], [`EntryId`] - The persisted record model
//!
//! ## Rating & Matchmaking
//! - [`expected_score`], [`update_rating`], [`score_match`] - Pure ELO math
//! - [`MatchSelector`], [`Selection`], [`MatchPair`] - Matchup selection
//!
//! ## Voting & Entry Lifecycle
//! - [`VotingCoordinator`], [`VoteReceipt`], [`VoteError`] - Transactional vote commits
//! - [`submit_entry`], [`remove_entry`], [`leaderboard`] - Upload, deletion, ranking
//!
//! ## External Service Seams
//! - [`EntryStore`], [`EntrySubscription`] - Document store + snapshot pushes
//! - [`BlobStore`], [`BlobRef`] - Image blob storage
//! - [`IdentityProvider`], [`UserId`] - Anonymous identity issuance
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.
//!
//! # Quick start
//!
//! ```rust
//! use duelboard::{AppContext, EntryStore, MatchSelector, NewEntry, Selection, VotingCoordinator};
//! use duelboard::{leaderboard, submit_entry};
//!
//! # tokio_test::block_on(async {
//! let ctx = AppContext::mock();
//!
//! for title in ["dawn", "dusk", "noon"] {
//!     submit_entry(&ctx, NewEntry {
//!         title: title.to_string(),
//!         author: "Ada".to_string(),
//!         pin: "4321".to_string(),
//!         image_bytes: vec![0xFF, 0xD8],
//!         content_type: "image/jpeg".to_string(),
//!     })
//!     .await
//!     .expect("submit");
//! }
//!
//! let sub = ctx.entries.subscribe().await.expect("subscribe");
//! let snapshot = sub.latest();
//!
//! let mut selector = MatchSelector::new(ctx.config.exploration_probability);
//! if let Selection::Pair(pair) = selector.on_snapshot(&snapshot).clone() {
//!     let coordinator = VotingCoordinator::from_context(&ctx);
//!     let receipt = coordinator
//!         .record_vote(&pair.left.id, &pair.right.id)
//!         .await
//!         .expect("vote");
//!     assert_eq!(receipt.winner.rating + receipt.loser.rating, 3000);
//! }
//!
//! let standings = leaderboard(&sub.latest());
//! assert_eq!(standings.len(), 3);
//! # });
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod entries;
pub mod hashing;
pub mod matchmaking;
pub mod rating;
pub mod store;
pub mod voting;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_EXPLORATION_PROBABILITY, DEFAULT_K_FACTOR, INITIAL_RATING, PIN_LENGTH,
};
pub use context::AppContext;
pub use entries::{EntryError, NewEntry, leaderboard, remove_entry, submit_entry};
pub use hashing::{hash_pin, is_valid_pin, verify_pin};
pub use matchmaking::{MatchPair, MatchSelector, Selection, select_pair};
pub use rating::{MatchOutcome, expected_score, score_match, update_rating};
pub use store::blob::{BlobError, BlobRef, BlobStore};
pub use store::identity::{IdentityError, IdentityProvider, UserId};
pub use store::{
    Entry, EntryDraft, EntryId, EntryStore, EntrySubscription, RatingWrite, StoreError,
    TransactBody, TxAbort,
};
pub use voting::{VoteError, VoteReceipt, VotingCoordinator};

#[cfg(any(test, feature = "mock"))]
pub use store::blob::MockBlobStore;
#[cfg(any(test, feature = "mock"))]
pub use store::identity::MockIdentityProvider;
#[cfg(any(test, feature = "mock"))]
pub use store::mock::MockEntryStore;
