//! Observers and output formatting.
//!
//! An [`Observer`] receives the aggregated statistics on each redraw tick.
//! [`TerminalObserver`] prints a summary line and, optionally, the full
//! per-bin dump; [`json`] serializes snapshots for external renderers.

pub mod json;
pub mod terminal;

use crate::result::Snapshot;
use crate::statistics::Histogram;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_histogram, format_summary};

/// Consumer of periodic simulation state.
pub trait Observer {
    /// Called on each redraw tick with the current snapshot and the
    /// histogram it was derived from.
    fn observe(&mut self, snapshot: &Snapshot, histogram: &Histogram);
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot, &Histogram),
{
    fn observe(&mut self, snapshot: &Snapshot, histogram: &Histogram) {
        self(snapshot, histogram)
    }
}

/// Prints each tick to stdout.
#[derive(Debug, Clone, Default)]
pub struct TerminalObserver {
    dump_histogram: bool,
}

impl TerminalObserver {
    /// Summary line only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print the per-bin table after each summary.
    pub fn with_histogram_dump(mut self) -> Self {
        self.dump_histogram = true;
        self
    }

    /// Text printed for one tick.
    pub fn render(&self, snapshot: &Snapshot, histogram: &Histogram) -> String {
        let mut output = format_summary(snapshot);
        output.push('\n');
        if self.dump_histogram {
            output.push_str(&format_histogram(histogram));
        }
        output
    }
}

impl Observer for TerminalObserver {
    fn observe(&mut self, snapshot: &Snapshot, histogram: &Histogram) {
        print!("{}", self.render(snapshot, histogram));
    }
}
