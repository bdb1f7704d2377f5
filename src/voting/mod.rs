//! Vote commits.
//!
//! [`VotingCoordinator`] turns a decided matchup into an atomic rating
//! update. The transaction body reads both records fresh inside the store
//! transaction (never from the UI's cached snapshot), so concurrent voters
//! cannot lose each other's updates, and a record deleted mid-flight aborts
//! the whole commit.

pub mod error;


pub use error::VoteError;

use std::sync::Arc;

use tracing::{debug, info};

use crate::context::AppContext;
use crate::rating;
use crate::store::{EntryId, EntryStore, RatingWrite, StoreError, TxAbort};

/// The committed rating writes for one vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    /// Winner's committed write.
    pub winner: RatingWrite,
    /// Loser's committed write.
    pub loser: RatingWrite,
}

/// Orchestrates the vote path: rating math plus the store transaction.
pub struct VotingCoordinator {
    store: Arc<dyn EntryStore>,
    k_factor: f64,
}

impl VotingCoordinator {
    /// Creates a coordinator over `store` with the given K-factor.
    pub fn new(store: Arc<dyn EntryStore>, k_factor: f64) -> Self {
        Self { store, k_factor }
    }

    /// Creates a coordinator wired from an [`AppContext`].
    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(Arc::clone(&ctx.entries), ctx.config.k_factor)
    }

    /// Returns the configured K-factor.
    pub fn k_factor(&self) -> f64 {
        self.k_factor
    }

    /// Records a decided matchup.
    ///
    /// Both records are read fresh inside one store transaction; the new
    /// ratings are computed from those reads per the rating module and
    /// committed atomically. If either record vanished, nothing is written
    /// and [`VoteError::StaleMatch`] is returned; the caller should select a
    /// new pair rather than retry. Transport failures surface as
    /// [`VoteError::Store`]; the vote is never retried automatically.
    pub async fn record_vote(
        &self,
        winner: &EntryId,
        loser: &EntryId,
    ) -> Result<VoteReceipt, VoteError> {
        if winner == loser {
            return Err(VoteError::SelfMatch { id: winner.clone() });
        }

        debug!(%winner, %loser, "recording vote");

        let ids = [winner.clone(), loser.clone()];
        let winner_id = winner.clone();
        let loser_id = loser.clone();
        let k_factor = self.k_factor;

        let body = move |reads: &[Option<crate::store::Entry>]| {
            let winner_entry = reads
                .first()
                .and_then(Option::as_ref)
                .ok_or_else(|| TxAbort::MissingRecord(winner_id.clone()))?;
            let loser_entry = reads
                .get(1)
                .and_then(Option::as_ref)
                .ok_or_else(|| TxAbort::MissingRecord(loser_id.clone()))?;

            let outcome = rating::score_match(winner_entry.rating, loser_entry.rating, k_factor);

            Ok(vec![
                RatingWrite {
                    id: winner_entry.id.clone(),
                    rating: outcome.winner,
                },
                RatingWrite {
                    id: loser_entry.id.clone(),
                    rating: outcome.loser,
                },
            ])
        };

        let writes = self
            .store
            .transact(&ids, &body)
            .await
            .map_err(|e| match e {
                StoreError::TransactionAborted { id } => VoteError::StaleMatch { id },
                other => VoteError::Store(other),
            })?;

        let mut writes = writes.into_iter();
        let (Some(winner_write), Some(loser_write)) = (writes.next(), writes.next()) else {
            return Err(VoteError::Store(StoreError::Transport {
                message: "transaction returned a malformed write set".to_string(),
            }));
        };

        info!(
            winner = %winner_write.id,
            winner_rating = winner_write.rating,
            loser = %loser_write.id,
            loser_rating = loser_write.rating,
            "vote committed"
        );

        Ok(VoteReceipt {
            winner: winner_write,
            loser: loser_write,
        })
    }
}
