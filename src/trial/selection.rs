//! The reject-then-leap stopping rule applied to a fixed arrival order.
//!
//! Everything here is a pure function of the supplied ranks, so a test can
//! construct an arrival order by hand and check exactly which candidate the
//! rule picks.

/// Outcome of applying the stopping rule to one arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Position (arrival index) of the chosen candidate.
    pub position: usize,
    /// Rank of the chosen candidate.
    pub rank: usize,
    /// Threshold the chosen candidate had to beat.
    pub best_rejected: usize,
    /// True when no candidate beat the threshold and the last one was taken.
    pub forced: bool,
}

/// Best rank among the first `reject_count` arrivals.
///
/// With nothing rejected the threshold is the sentinel `0`, the lowest
/// possible rank. A first arrival of rank 0 therefore does not beat it and
/// is passed over. `reject_count == 1` uses the real rank of the single
/// rejected arrival instead.
pub fn best_rejected(ranks: &[usize], reject_count: usize) -> usize {
    ranks[..reject_count].iter().copied().max().unwrap_or(0)
}

/// Apply the stopping rule to a given arrival order.
///
/// Rejects the first `reject_count` arrivals, then takes the first later
/// arrival whose rank strictly exceeds the best rejected rank. If none does,
/// the last arrival is taken.
///
/// # Panics
///
/// Panics if `ranks` is empty or `reject_count >= ranks.len()`.
pub fn select_candidate(ranks: &[usize], reject_count: usize) -> Selection {
    assert!(!ranks.is_empty(), "Cannot select from an empty pool");
    assert!(
        reject_count < ranks.len(),
        "Reject count {} must be less than pool size {}",
        reject_count,
        ranks.len()
    );

    let threshold = best_rejected(ranks, reject_count);

    let leap = ranks[reject_count..]
        .iter()
        .position(|&rank| rank > threshold)
        .map(|offset| reject_count + offset);

    match leap {
        Some(position) => Selection {
            position,
            rank: ranks[position],
            best_rejected: threshold,
            forced: false,
        },
        None => {
            let position = ranks.len() - 1;
            Selection {
                position,
                rank: ranks[position],
                best_rejected: threshold,
                forced: true,
            }
        }
    }
}

/// Whether the stopping rule picks the overall best candidate.
///
/// # Panics
///
/// Same preconditions as [`select_candidate`].
pub fn is_success(ranks: &[usize], reject_count: usize) -> bool {
    let selection = select_candidate(ranks, reject_count);
    let best_overall = ranks.iter().copied().max().unwrap_or(0);
    selection.rank == best_overall
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pool of 100 with the overall best at position 50. The rejected pile
    /// (positions 0..37) holds ranks 13..50; positions 37..50 hold ranks
    /// 0..13, all below the best rejected rank, so the first leap is at 50.
    fn staged_pool() -> Vec<usize> {
        let mut ranks: Vec<usize> = (13..50).collect();
        ranks.extend(0..13);
        ranks.push(99);
        ranks.extend(50..99);
        ranks
    }

    #[test]
    fn test_staged_pool_selects_best() {
        let ranks = staged_pool();
        assert_eq!(ranks.len(), 100);
        assert_eq!(ranks[50], 99);
        assert_eq!(best_rejected(&ranks, 37), 49);

        let selection = select_candidate(&ranks, 37);
        assert_eq!(selection.position, 50);
        assert_eq!(selection.rank, 99);
        assert_eq!(selection.best_rejected, 49);
        assert!(!selection.forced);
        assert!(is_success(&ranks, 37));
    }

    #[test]
    fn test_forced_choice_takes_last() {
        // Best arrives inside the rejected pile; nobody can beat it.
        let ranks = vec![2, 9, 0, 5, 3, 7, 1];
        let selection = select_candidate(&ranks, 3);
        assert!(selection.forced);
        assert_eq!(selection.position, 6);
        assert_eq!(selection.rank, 1);
        assert!(!is_success(&ranks, 3));
    }

    #[test]
    fn test_zero_reject_takes_first_nonzero() {
        let ranks = vec![3, 0, 4, 1, 2];
        let selection = select_candidate(&ranks, 0);
        assert_eq!(selection.best_rejected, 0);
        assert_eq!(selection.position, 0);
        assert_eq!(selection.rank, 3);
    }

    #[test]
    fn test_zero_reject_sentinel_skips_rank_zero() {
        // The sentinel equals the lowest rank, so a leading 0 is passed over.
        let ranks = vec![0, 2, 4, 1, 3];
        let selection = select_candidate(&ranks, 0);
        assert_eq!(selection.position, 1);
        assert_eq!(selection.rank, 2);
    }

    #[test]
    fn test_single_reject_matches_sentinel_when_first_is_zero() {
        // With one rejected arrival of rank 0, the threshold is that real
        // rank, which coincides with the zero sentinel.
        let ranks = vec![0, 2, 4, 1, 3];
        assert_eq!(best_rejected(&ranks, 1), 0);
        assert_eq!(select_candidate(&ranks, 1), select_candidate(&ranks, 0));

        // Otherwise the single rejected rank is the threshold.
        let ranks = vec![2, 1, 4, 0, 3];
        let selection = select_candidate(&ranks, 1);
        assert_eq!(selection.best_rejected, 2);
        assert_eq!(selection.position, 2);
        assert!(is_success(&ranks, 1));
    }

    #[test]
    fn test_selection_is_deterministic() {
        let ranks = vec![5, 3, 8, 1, 9, 0, 2, 7, 4, 6];
        for reject_count in 0..ranks.len() {
            let first = select_candidate(&ranks, reject_count);
            let second = select_candidate(&ranks, reject_count);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_two_candidates() {
        assert!(is_success(&[0, 1], 0));
        assert!(is_success(&[1, 0], 0));
        assert!(is_success(&[0, 1], 1));
        assert!(!is_success(&[1, 0], 1));
    }

    #[test]
    #[should_panic(expected = "must be less than pool size")]
    fn test_reject_count_out_of_range_panics() {
        select_candidate(&[0, 1, 2], 3);
    }

    #[test]
    #[should_panic(expected = "Cannot select from an empty pool")]
    fn test_empty_pool_panics() {
        select_candidate(&[], 0);
    }
}
