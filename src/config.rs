//! Configuration for the secretary simulation.

use std::time::Duration;

use crate::constants::{
    DEFAULT_BIN_COUNT, DEFAULT_POOL_SIZE, DEFAULT_REDRAW_INTERVAL, DEFAULT_SMOOTHING_WINDOW,
};
use crate::error::{Error, Result};

/// Configuration options for a `Simulator`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Candidates per trial (default: 1,000).
    pub pool_size: usize,

    /// Histogram bins over the reject fraction (default: 999).
    ///
    /// Must be less than `pool_size` so every bin is reachable.
    pub bin_count: usize,

    /// Time between observer ticks (default: 1 s).
    ///
    /// Zero means the observer sees every trial.
    pub redraw_interval: Duration,

    /// Moving-average width in bins for the smoothed curve (default: 25).
    pub smoothing_window: usize,

    /// Optional deterministic seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            bin_count: DEFAULT_BIN_COUNT,
            redraw_interval: DEFAULT_REDRAW_INTERVAL,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            seed: None,
        }
    }
}

impl Config {
    /// Check the configuration before any trial runs.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: pool of at least two
    /// candidates, at least one bin, fewer bins than candidates, and a
    /// smoothing window between one bin and the full histogram.
    pub fn validate(&self) -> Result<()> {
        if self.pool_size < 2 {
            return Err(Error::PoolTooSmall {
                pool_size: self.pool_size,
            });
        }
        if self.bin_count == 0 {
            return Err(Error::NoBins);
        }
        if self.bin_count >= self.pool_size {
            return Err(Error::TooManyBins {
                bin_count: self.bin_count,
                pool_size: self.pool_size,
            });
        }
        if self.smoothing_window == 0 {
            return Err(Error::EmptyWindow);
        }
        if self.smoothing_window > self.bin_count {
            return Err(Error::WindowTooWide {
                window: self.smoothing_window,
                bin_count: self.bin_count,
            });
        }
        Ok(())
    }
}
