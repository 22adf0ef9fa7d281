//! Terminal output formatting with colors.

use colored::Colorize;

use crate::constants::INV_E;
use crate::result::Snapshot;
use crate::statistics::Histogram;

/// Peak offsets from 1/e below this read as converged.
const CONVERGED_TOLERANCE: f64 = 0.02;

/// Format a one-line summary of a snapshot.
pub fn format_summary(snapshot: &Snapshot) -> String {
    let mut output = format!(
        "{} P vs a ({} rounds, {:.0}/s)",
        "secretary problem:".bold(),
        snapshot.trials,
        snapshot.trials_per_sec()
    );

    match snapshot.peak {
        Some(peak) => {
            let converged = (peak.reject_fraction - INV_E).abs() < CONVERGED_TOLERANCE
                && (peak.probability - INV_E).abs() < CONVERGED_TOLERANCE;
            let text = format!(
                "peak a = {:.3}, P = {:.3}",
                peak.reject_fraction, peak.probability
            );
            let text = if converged {
                text.green().to_string()
            } else {
                text.yellow().to_string()
            };
            output.push_str(&format!("  {}  (1/e = {:.3})", text, INV_E));
        }
        None => output.push_str(&format!("  {}", "no peak yet".dimmed())),
    }

    output
}

/// Format the per-bin table: index, bounds, counts and probability.
///
/// Bins with no trials show `?` for the probability.
pub fn format_histogram(histogram: &Histogram) -> String {
    let mut output = String::new();
    output.push_str("--- start of histogram ---\n");
    output.push_str("i, amin, amax, count, success, prob\n");

    for row in histogram.bin_reports() {
        let prob = match row.probability {
            Some(p) => format!("{:.2}", p),
            None => "?".to_string(),
        };
        output.push_str(&format!(
            "{} {:.2} {:.2} {} {} {}\n",
            row.index, row.lower, row.upper, row.trials, row.successes, prob
        ));
    }

    output.push_str("--- end of histogram ---\n");
    output
}
