//! Random selection without replacement.

use lunchroll_core::Candidate;
use rand::seq::SliceRandom;
use rand::Rng;

/// Reduces a requested sample size to what is available.
///
/// A pool smaller than the request yields the whole pool: one candidate with
/// a request of five gives one, and an empty pool gives zero.
#[must_use]
pub fn clamp_count(requested: usize, available: usize) -> usize {
    requested.min(available)
}

/// Shuffles the whole pool with `rng` (Fisher-Yates, so every ordering is
/// equally likely) and keeps the first `clamp_count(count, pool)` entries.
///
/// The returned order is the shuffled order. The same seed and input always
/// give the same output.
pub fn sample<R: Rng + ?Sized>(
    mut candidates: Vec<Candidate>,
    count: usize,
    rng: &mut R,
) -> Vec<Candidate> {
    let take = clamp_count(count, candidates.len());
    candidates.shuffle(rng);
    candidates.truncate(take);
    candidates
}
