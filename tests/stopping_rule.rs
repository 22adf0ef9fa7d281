//! Stopping-rule behavior on hand-built arrival orders.

use secretary_sim::trial::{best_rejected, is_success, select_candidate};

/// Pool of 100, 37 rejected, overall best at position 50, and everyone
/// arriving between the rejected pile and the best ranks below the best
/// rejected candidate.
#[test]
fn leaps_at_best_after_rejected_pile() {
    let mut ranks: Vec<usize> = (13..50).collect(); // positions 0..37
    ranks.extend(0..13); // positions 37..50
    ranks.push(99); // position 50
    ranks.extend(50..99); // positions 51..100
    assert_eq!(ranks.len(), 100);

    let selection = select_candidate(&ranks, 37);
    assert_eq!(selection.position, 50);
    assert!(is_success(&ranks, 37));
}

/// The first candidate who beats the rejected pile is taken even if a
/// better one arrives later.
#[test]
fn takes_first_improvement_not_best() {
    let ranks = vec![4, 2, 6, 9, 1, 3, 0, 5, 8, 7];
    let selection = select_candidate(&ranks, 2);
    assert_eq!(selection.position, 2);
    assert_eq!(selection.rank, 6);
    assert!(!is_success(&ranks, 2));
}

/// Characterizes the zero-reject sentinel: a rank-0 first arrival is
/// skipped, and the result matches rejecting exactly that arrival.
#[test]
fn zero_reject_sentinel_convention() {
    let ranks = vec![0, 3, 1, 4, 2];
    assert_eq!(best_rejected(&ranks, 0), 0);

    let none_rejected = select_candidate(&ranks, 0);
    let one_rejected = select_candidate(&ranks, 1);
    assert_eq!(none_rejected.position, 1);
    assert_eq!(none_rejected, one_rejected);

    // Any other first arrival is simply taken with nothing rejected.
    let ranks = vec![2, 3, 1, 4, 0];
    assert_eq!(select_candidate(&ranks, 0).position, 0);
    assert_eq!(select_candidate(&ranks, 1).position, 1);
}

/// Same arrival order and reject count always give the same answer.
#[test]
fn pure_function_of_permutation() {
    let ranks: Vec<usize> = (0..64).map(|i| (i * 37) % 64).collect();
    for reject_count in 0..64 {
        let expected = is_success(&ranks, reject_count);
        for _ in 0..3 {
            assert_eq!(is_success(&ranks, reject_count), expected);
        }
    }
}
