//! Online success histogram keyed by reject fraction.
//!
//! Bins partition `[A_MIN, A_MAX)` evenly. Each trial touches exactly one bin,
//! and that bin's probability is refreshed right after the increment, so
//! the division never sees a zero count.

use serde::{Deserialize, Serialize};

use crate::constants::{A_MAX, A_MIN};
use crate::error::Result;
use crate::types::{CurvePoint, Peak};

use super::peak::find_peak;
use super::smoothing::moving_average;

/// Trial and success counts for one bin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Trials whose reject fraction fell in this bin.
    pub trials: u64,
    /// Trials in this bin that picked the best candidate.
    pub successes: u64,
    /// `successes / trials`, or 0 for a bin never hit.
    pub probability: f64,
}

/// One row of the textual histogram dump.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinReport {
    /// Bin index.
    pub index: usize,
    /// Inclusive lower bound of the bin.
    pub lower: f64,
    /// Exclusive upper bound of the bin.
    pub upper: f64,
    /// Trials recorded.
    pub trials: u64,
    /// Successes recorded.
    pub successes: u64,
    /// Success probability, `None` when the bin has no trials.
    pub probability: Option<f64>,
}

/// Fixed-size histogram of trial outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    bins: Vec<Bin>,
    total_trials: u64,
}

impl Histogram {
    /// Create a histogram with `bin_count` empty bins.
    ///
    /// # Panics
    ///
    /// Panics if `bin_count` is zero.
    pub fn new(bin_count: usize) -> Self {
        assert!(bin_count > 0, "Histogram needs at least one bin");
        Self {
            bins: vec![Bin::default(); bin_count],
            total_trials: 0,
        }
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Width of every bin on the reject-fraction axis.
    pub fn bin_width(&self) -> f64 {
        (A_MAX - A_MIN) / self.bins.len() as f64
    }

    /// All bins in order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Total trials recorded across all bins.
    pub fn total_trials(&self) -> u64 {
        self.total_trials
    }

    /// Total successes recorded across all bins.
    pub fn total_successes(&self) -> u64 {
        self.bins.iter().map(|bin| bin.successes).sum()
    }

    /// Bin that a reject fraction falls into.
    ///
    /// Fractions outside `[A_MIN, A_MAX)` are clamped to the edge bins; NaN
    /// maps to bin 0.
    pub fn bin_index(&self, reject_fraction: f64) -> usize {
        let scaled = ((reject_fraction - A_MIN) / (A_MAX - A_MIN)) * self.bins.len() as f64;
        if scaled.is_nan() || scaled <= 0.0 {
            return 0;
        }
        // Float-to-int casts saturate, so huge values land on the last bin.
        (scaled.floor() as usize).min(self.bins.len() - 1)
    }

    /// `[lower, upper)` bounds of bin `index`.
    pub fn bin_bounds(&self, index: usize) -> (f64, f64) {
        let width = self.bin_width();
        (
            A_MIN + width * index as f64,
            A_MIN + width * (index + 1) as f64,
        )
    }

    /// Midpoint of bin `index`.
    pub fn bin_center(&self, index: usize) -> f64 {
        A_MIN + self.bin_width() * (index as f64 + 0.5)
    }

    /// Bin centers, one per bin.
    pub fn x_axis(&self) -> Vec<f64> {
        (0..self.bins.len()).map(|i| self.bin_center(i)).collect()
    }

    /// Record one trial outcome.
    pub fn record_outcome(&mut self, reject_fraction: f64, success: bool) {
        let index = self.bin_index(reject_fraction);
        let bin = &mut self.bins[index];

        bin.trials += 1;
        if success {
            bin.successes += 1;
        }
        bin.probability = bin.successes as f64 / bin.trials as f64;

        self.total_trials += 1;
    }

    /// Per-bin success probabilities.
    pub fn probabilities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.probability).collect()
    }

    /// Raw probability curve at bin centers.
    pub fn raw_curve(&self) -> Vec<CurvePoint> {
        self.bins
            .iter()
            .enumerate()
            .map(|(i, bin)| CurvePoint::new(self.bin_center(i), bin.probability))
            .collect()
    }

    /// Reject fraction a smoothed value at `index` stands for.
    ///
    /// Smoothed entry `index` averages bins `index..index + window_width`,
    /// so it sits at the midpoint of that window, `(window_width - 1) / 2`
    /// bins right of `bin_center(index)`. A window of 1 gives the bin
    /// center.
    pub fn smoothed_x(&self, index: usize, window_width: usize) -> f64 {
        let shift = window_width.saturating_sub(1) as f64 / 2.0;
        self.bin_center(index) + self.bin_width() * shift
    }

    /// Window midpoints for a smoothed curve of `window_width`.
    pub fn smoothed_x_axis(&self, window_width: usize) -> Vec<f64> {
        (0..self.bins.len())
            .map(|i| self.smoothed_x(i, window_width))
            .collect()
    }

    /// Moving-average probability curve, each point at its window midpoint.
    ///
    /// The last `window_width - 1` points are padded with 0.
    ///
    /// # Errors
    ///
    /// Returns an error if `window_width` is zero.
    pub fn smoothed_curve(&self, window_width: usize) -> Result<Vec<CurvePoint>> {
        let smoothed = moving_average(&self.probabilities(), window_width)?;
        Ok(smoothed
            .into_iter()
            .enumerate()
            .map(|(i, p)| CurvePoint::new(self.smoothed_x(i, window_width), p))
            .collect())
    }

    /// Highest point of the smoothed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `window_width` is zero.
    pub fn peak(&self, window_width: usize) -> Result<Option<Peak>> {
        let smoothed = moving_average(&self.probabilities(), window_width)?;
        Ok(self.smoothed_peak(&smoothed, window_width))
    }

    /// Peak of a curve already smoothed with `window_width`.
    ///
    /// `smoothed` must come from [`moving_average`] over this histogram's
    /// probabilities with the same width.
    pub fn smoothed_peak(&self, smoothed: &[f64], window_width: usize) -> Option<Peak> {
        find_peak(smoothed).map(|(index, probability)| Peak {
            index,
            reject_fraction: self.smoothed_x(index, window_width),
            probability,
        })
    }

    /// Rows for the textual dump.
    pub fn bin_reports(&self) -> Vec<BinReport> {
        self.bins
            .iter()
            .enumerate()
            .map(|(index, bin)| {
                let (lower, upper) = self.bin_bounds(index);
                BinReport {
                    index,
                    lower,
                    upper,
                    trials: bin.trials,
                    successes: bin.successes,
                    probability: (bin.trials > 0).then_some(bin.probability),
                }
            })
            .collect()
    }
}
