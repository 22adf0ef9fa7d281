//! Fixed constants for the simulation.

use std::time::Duration;

/// Number of candidates interviewed per trial.
pub const DEFAULT_POOL_SIZE: usize = 1000;

/// Number of histogram bins over the reject fraction.
///
/// Must stay below the pool size: reject fractions are quantized to
/// `1 / pool_size`, so more bins than that leaves some bins unreachable.
pub const DEFAULT_BIN_COUNT: usize = 999;

/// Wall-clock time between observer ticks.
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_secs(1);

/// Width, in bins, of the moving average applied to the raw curve.
pub const DEFAULT_SMOOTHING_WINDOW: usize = 25;

/// Lower edge of the reject-fraction axis.
pub const A_MIN: f64 = 0.0;

/// Upper edge of the reject-fraction axis (exclusive).
pub const A_MAX: f64 = 1.0;

/// Theoretical optimum for both the reject fraction and the success
/// probability as the pool grows.
pub const INV_E: f64 = 0.367_879_441_171_442_33;
