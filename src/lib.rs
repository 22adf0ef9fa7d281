//! # secretary-sim
//!
//! Monte Carlo estimate of the optimal stopping rule for the secretary
//! problem.
//!
//! Each trial interviews a randomly ordered pool of ranked candidates,
//! rejects a random fraction `a` of them, then takes the first candidate who
//! beats everyone rejected. Outcomes are binned by `a`, producing:
//! - A raw success-probability curve over the reject fraction
//! - A moving-average smoothed curve
//! - The peak of the smoothed curve, which converges to `(1/e, 1/e)`
//!
//! ## Quick Start
//!
//! ```ignore
//! use secretary_sim::Simulator;
//!
//! let mut sim = Simulator::new().seed(1).start()?;
//! let snapshot = sim.run_trials(200_000, &mut |_: &_, _: &_| {})?;
//!
//! if let Some(peak) = snapshot.peak {
//!     println!("best a = {:.3}, P = {:.3}", peak.reject_fraction, peak.probability);
//! }
//! ```
//!
//! Single trials are available directly through [`trial::run_trial`], and
//! the stopping rule on a hand-built arrival order through
//! [`trial::select_candidate`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod simulator;
mod types;

// Functional modules
pub mod logging;
pub mod output;
pub mod statistics;
pub mod trial;

// Re-exports for public API
pub use config::Config;
pub use constants::{
    A_MAX, A_MIN, DEFAULT_BIN_COUNT, DEFAULT_POOL_SIZE, DEFAULT_REDRAW_INTERVAL,
    DEFAULT_SMOOTHING_WINDOW, INV_E,
};
pub use error::{Error, Result};
pub use output::{Observer, TerminalObserver};
pub use result::Snapshot;
pub use simulator::{Simulation, Simulator, TrialRecord};
pub use statistics::{Bin, BinReport, Histogram};
pub use types::{CurvePoint, Peak};

/// Run a bounded simulation with the default configuration and no observer.
///
/// # Errors
///
/// Only fails if the default configuration is invalid, which it is not.
pub fn estimate(trials: u64) -> Result<Snapshot> {
    let mut simulation = Simulator::new().start()?;
    simulation.run_trials(trials, &mut |_: &Snapshot, _: &Histogram| {})
}
