//! ELO rating math.
//!
//! Pure functions only: expected score, single-rating update, and the
//! combined matchup update. Both sides of a matchup are updated from the
//! *pre-update* ratings, so the two computations never depend on each other.
//!
//! Ratings are plain `i64` values with no floor or ceiling; long-running
//! boards may drift outside the typical 1000-2000 band and every function
//! here accepts that.

use crate::constants::{LOSS_SCORE, RATING_SCALE, WIN_SCORE};

/// New ratings for both sides of a decided matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Winner's rating after the update.
    pub winner: i64,
    /// Loser's rating after the update.
    pub loser: i64,
}

/// Expected score of `rating_a` against `rating_b`.
///
/// Logistic curve `1 / (1 + 10^((b - a) / 400))`; always in `(0, 1)` and
/// symmetric: `expected_score(a, b) + expected_score(b, a) == 1` within
/// floating-point tolerance.
#[inline]
pub fn expected_score(rating_a: i64, rating_b: i64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) as f64 / RATING_SCALE))
}

/// Applies a single rating adjustment: `floor(old + k * (actual - expected))`.
///
/// `actual` is `1.0` for a win and `0.0` for a loss; draws are not modeled.
#[inline]
pub fn update_rating(old_rating: i64, expected: f64, actual: f64, k_factor: f64) -> i64 {
    (old_rating as f64 + k_factor * (actual - expected)).floor() as i64
}

/// Computes both new ratings for a decided matchup.
///
/// Both expected scores are taken from the pre-update ratings; neither update
/// sees the other's result.
pub fn score_match(winner_rating: i64, loser_rating: i64, k_factor: f64) -> MatchOutcome {
    let expected_winner = expected_score(winner_rating, loser_rating);
    let expected_loser = expected_score(loser_rating, winner_rating);

    MatchOutcome {
        winner: update_rating(winner_rating, expected_winner, WIN_SCORE, k_factor),
        loser: update_rating(loser_rating, expected_loser, LOSS_SCORE, k_factor),
    }
}
