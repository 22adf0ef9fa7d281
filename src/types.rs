//! Common value types shared by the aggregator and observers.

use serde::{Deserialize, Serialize};

/// One point on a probability curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Reject fraction (bin center, or window midpoint when smoothed).
    pub x: f64,
    /// Success probability.
    pub p: f64,
}

impl CurvePoint {
    /// Create a curve point.
    pub fn new(x: f64, p: f64) -> Self {
        Self { x, p }
    }
}

/// Highest point of the smoothed curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Bin index of the peak.
    pub index: usize,
    /// Reject fraction at the midpoint of the smoothing window starting
    /// at that bin (estimate of the optimum).
    pub reject_fraction: f64,
    /// Smoothed success probability at the peak.
    pub probability: f64,
}
