//! Reusable candidate pool with in-place shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

/// Arrival order of ranked candidates for one trial.
///
/// Ranks are `0..size`, all distinct; higher is better. The buffer is reused
/// across trials so the steady-state loop does not allocate.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    ranks: Vec<usize>,
}

impl CandidatePool {
    /// Create a pool of `size` candidates in rank order.
    pub fn new(size: usize) -> Self {
        Self {
            ranks: (0..size).collect(),
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the pool has no candidates.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Current arrival order.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Draw a fresh uniformly random arrival order.
    ///
    /// The ranks are rewritten to `0..size` before shuffling so a caller that
    /// mutated them through some other path still gets a valid permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[usize] {
        for (slot, rank) in self.ranks.iter_mut().zip(0..) {
            *slot = rank;
        }
        self.ranks.shuffle(rng);
        &self.ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = CandidatePool::new(257);

        for _ in 0..10 {
            let mut ranks = pool.shuffle(&mut rng).to_vec();
            ranks.sort_unstable();
            assert_eq!(ranks, (0..257).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_shuffle_reproducible_with_seed() {
        let mut a = CandidatePool::new(50);
        let mut b = CandidatePool::new(50);
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        assert_eq!(a.shuffle(&mut rng_a), b.shuffle(&mut rng_b));
    }

    #[test]
    fn test_best_position_roughly_uniform() {
        // Over many shuffles the best candidate should land in each half of
        // the pool about equally often.
        let mut rng = StdRng::seed_from_u64(1234);
        let mut pool = CandidatePool::new(20);
        let trials = 20_000;

        let early = (0..trials)
            .filter(|_| {
                let ranks = pool.shuffle(&mut rng);
                ranks.iter().position(|&r| r == 19).unwrap() < 10
            })
            .count();

        let frac = early as f64 / trials as f64;
        assert!((frac - 0.5).abs() < 0.02, "early fraction {}", frac);
    }
}
