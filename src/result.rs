//! Snapshot of the aggregated statistics handed to observers.

use serde::{Deserialize, Serialize};

use crate::constants::INV_E;
use crate::error::Result;
use crate::statistics::{moving_average, Histogram};
use crate::types::Peak;

/// Aggregated state at one observation tick.
///
/// Derived from the histogram on demand; nothing here is carried from one
/// tick to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Trials run so far.
    pub trials: u64,

    /// Successful trials so far, across all bins.
    pub successes: u64,

    /// Candidates per trial.
    pub pool_size: usize,

    /// Moving-average width in bins.
    pub smoothing_window: usize,

    /// Bin centers on the reject-fraction axis, the x position of `raw`.
    pub x: Vec<f64>,

    /// Per-bin success probability (0 for bins with no trials).
    pub raw: Vec<f64>,

    /// Moving average of `raw`, padded with 0 at the tail.
    pub smoothed: Vec<f64>,

    /// Midpoint of each smoothing window, the x position of `smoothed`.
    pub smoothed_x: Vec<f64>,

    /// Highest point of `smoothed`.
    pub peak: Option<Peak>,

    /// Wall-clock seconds since the simulation started.
    pub elapsed_secs: f64,
}

impl Snapshot {
    /// Build a snapshot from the current histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if `smoothing_window` is zero.
    pub fn from_histogram(
        histogram: &Histogram,
        pool_size: usize,
        smoothing_window: usize,
        elapsed_secs: f64,
    ) -> Result<Self> {
        let raw = histogram.probabilities();
        let smoothed = moving_average(&raw, smoothing_window)?;
        let peak = histogram.smoothed_peak(&smoothed, smoothing_window);

        Ok(Self {
            trials: histogram.total_trials(),
            successes: histogram.total_successes(),
            pool_size,
            smoothing_window,
            x: histogram.x_axis(),
            raw,
            smoothed_x: histogram.smoothed_x_axis(smoothing_window),
            smoothed,
            peak,
            elapsed_secs,
        })
    }

    /// Trial throughput since start.
    pub fn trials_per_sec(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.trials as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }

    /// How far the peak sits from `(1/e, 1/e)`, as `(Δa, ΔP)`.
    pub fn offset_from_optimum(&self) -> Option<(f64, f64)> {
        self.peak
            .map(|peak| (peak.reject_fraction - INV_E, peak.probability - INV_E))
    }
}
