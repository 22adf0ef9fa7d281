//! Peak location on a probability curve.

/// Index and value of the largest entry.
///
/// Ties go to the lowest index. NaN entries are never chosen over a number.
/// Returns `None` for an empty curve.
pub fn find_peak(curve: &[f64]) -> Option<(usize, f64)> {
    curve
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, p)| !p.is_nan())
        .fold(None, |best, (i, p)| match best {
            Some((_, best_p)) if best_p >= p => best,
            _ => Some((i, p)),
        })
}
