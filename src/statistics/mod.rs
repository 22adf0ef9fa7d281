//! Aggregation of trial outcomes into a success-probability curve.
//!
//! This module provides the statistical side of the simulation:
//! - A fixed-bin histogram of trials and successes keyed by reject fraction
//! - Moving-average smoothing using a cumulative sum
//! - Peak location on the smoothed curve

mod histogram;
mod peak;
mod smoothing;

pub use histogram::{Bin, BinReport, Histogram};
pub use peak::find_peak;
pub use smoothing::{moving_average, PAD_VALUE};
