//! Matchup selection.
//!
//! Two strategies, chosen per selection by a coin weighted with the
//! configured exploration probability:
//!
//! - **exploration**: two entries uniformly at random, ignoring rating, so
//!   far-apart entries still get compared occasionally;
//! - **proximity**: a uniformly random adjacent pair in rating order,
//!   biasing matchups toward similarly-rated entries for faster convergence.
//!
//! Selection is randomized, not adversarial: no fairness or coverage
//! guarantee beyond the two branches' distributions in expectation.


use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::constants::DEFAULT_EXPLORATION_PROBABILITY;
use crate::store::Entry;

/// An unordered pair of entry snapshots to present for voting.
///
/// Full snapshots, not ids: the ratings at selection time are needed for
/// display even if the caller never re-reads before the vote commits.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPair {
    pub left: Entry,
    pub right: Entry,
}

impl MatchPair {
    /// Returns `true` if either side has the given id.
    pub fn contains(&self, id: &crate::store::EntryId) -> bool {
        self.left.id == *id || self.right.id == *id
    }
}

/// Result of a selection pass over the latest snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A matchup is ready.
    Pair(MatchPair),
    /// Fewer than two entries exist; nothing can be presented.
    InsufficientEntries,
}

impl Selection {
    /// Returns the pair, if one was selectable.
    pub fn pair(&self) -> Option<&MatchPair> {
        match self {
            Selection::Pair(pair) => Some(pair),
            Selection::InsufficientEntries => None,
        }
    }
}

/// Picks the next matchup from `entries`.
///
/// With probability `exploration_probability` two distinct indices are drawn
/// uniformly (re-drawing on collision); otherwise the list is sorted
/// ascending by rating and a random adjacent pair is taken. Returns
/// [`Selection::InsufficientEntries`] when fewer than two entries exist.
pub fn select_pair(
    entries: &[Entry],
    exploration_probability: f64,
    rng: &mut impl Rng,
) -> Selection {
    let n = entries.len();
    if n < 2 {
        return Selection::InsufficientEntries;
    }

    if rng.random::<f64>() < exploration_probability {
        let first = rng.random_range(0..n);
        let mut second = rng.random_range(0..n);
        while second == first {
            second = rng.random_range(0..n);
        }

        debug!(branch = "exploration", n, "selected matchup");
        return Selection::Pair(MatchPair {
            left: entries[first].clone(),
            right: entries[second].clone(),
        });
    }

    // Stable sort: equal-rated entries keep snapshot order.
    let mut by_rating = entries.to_vec();
    by_rating.sort_by_key(|e| e.rating);

    let i = rng.random_range(0..n - 1);
    debug!(branch = "proximity", n, index = i, "selected matchup");
    Selection::Pair(MatchPair {
        left: by_rating[i].clone(),
        right: by_rating[i + 1].clone(),
    })
}

/// Stateful selector driven by snapshot pushes and vote submissions.
///
/// Holds no persisted state; it re-derives the current matchup from whatever
/// entry list it is handed. [`on_vote`](Self::on_vote) recomputes from the
/// pre-vote list so the UI never waits on a fresh snapshot; the replacement
/// pair may briefly include a just-voted entry, which is accepted.
pub struct MatchSelector {
    exploration_probability: f64,
    rng: StdRng,
    current: Selection,
}

impl MatchSelector {
    /// Creates a selector with the given exploration probability.
    pub fn new(exploration_probability: f64) -> Self {
        Self::with_rng(exploration_probability, StdRng::from_os_rng())
    }

    /// Creates a selector with the default exploration probability.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_EXPLORATION_PROBABILITY)
    }

    /// Creates a deterministic selector for tests.
    pub fn with_seed(exploration_probability: f64, seed: u64) -> Self {
        Self::with_rng(exploration_probability, StdRng::seed_from_u64(seed))
    }

    fn with_rng(exploration_probability: f64, rng: StdRng) -> Self {
        Self {
            exploration_probability,
            rng,
            current: Selection::InsufficientEntries,
        }
    }

    /// Returns the configured exploration probability.
    pub fn exploration_probability(&self) -> f64 {
        self.exploration_probability
    }

    /// Returns the current selection without recomputing.
    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Recomputes the matchup from a freshly pushed snapshot.
    pub fn on_snapshot(&mut self, entries: &[Entry]) -> &Selection {
        self.current = select_pair(entries, self.exploration_probability, &mut self.rng);
        &self.current
    }

    /// Recomputes the matchup immediately after a vote, from the pre-vote
    /// list, without waiting for the store to push the updated snapshot.
    pub fn on_vote(&mut self, pre_vote_entries: &[Entry]) -> &Selection {
        debug!(n = pre_vote_entries.len(), "reselecting after vote");
        self.on_snapshot(pre_vote_entries)
    }
}
