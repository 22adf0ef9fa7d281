//! Moving-average smoothing of the probability curve.

use crate::error::{Error, Result};

/// Value written where a full window does not fit.
pub const PAD_VALUE: f64 = 0.0;

/// Trailing simple moving average over `window` consecutive values.
///
/// Output `i` is the mean of `values[i..i + window]`, computed from a
/// running cumulative sum so each window costs O(1). The output has the
/// same length as the input: the last `window - 1` entries cannot hold a
/// full window and are set to [`PAD_VALUE`]. A window wider than the input
/// yields all padding.
///
/// # Errors
///
/// Returns [`Error::EmptyWindow`] if `window` is zero.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(Error::EmptyWindow);
    }

    let n = values.len();
    let mut smoothed = vec![PAD_VALUE; n];
    if window > n {
        return Ok(smoothed);
    }

    // cumsum[k] = sum of values[..k]
    let mut cumsum = Vec::with_capacity(n + 1);
    cumsum.push(0.0);
    let mut running = 0.0;
    for &v in values {
        running += v;
        cumsum.push(running);
    }

    let width = window as f64;
    for (i, out) in smoothed.iter_mut().take(n - window + 1).enumerate() {
        *out = (cumsum[i + window] - cumsum[i]) / width;
    }

    Ok(smoothed)
}
