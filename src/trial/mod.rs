//! Single trials of the secretary problem.
//!
//! A trial draws a random arrival order, rejects a prefix, then leaps at the
//! first candidate who beats everyone rejected:
//! - [`CandidatePool`] holds and reshuffles the arrival order
//! - [`select_candidate`] applies the stopping rule to a fixed order
//! - [`run_trial`] combines both and reports success

mod pool;
mod selection;

pub use pool::CandidatePool;
pub use selection::{best_rejected, is_success, select_candidate, Selection};

use rand::Rng;

/// Run one trial with a freshly allocated pool.
///
/// Returns `true` if the stopping rule picks the overall best candidate.
///
/// # Panics
///
/// Panics unless `reject_count < pool_size`.
pub fn run_trial<R: Rng + ?Sized>(pool_size: usize, reject_count: usize, rng: &mut R) -> bool {
    let mut pool = CandidatePool::new(pool_size);
    run_trial_in(&mut pool, reject_count, rng)
}

/// Run one trial reusing an existing pool buffer.
///
/// # Panics
///
/// Panics unless `reject_count < pool.len()`.
pub fn run_trial_in<R: Rng + ?Sized>(
    pool: &mut CandidatePool,
    reject_count: usize,
    rng: &mut R,
) -> bool {
    let ranks = pool.shuffle(rng);
    is_success(ranks, reject_count)
}
