//! Tracing setup for the simulator binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SECRETARY_LOG";

/// Initialize the tracing subscriber with human-readable output on stderr.
///
/// Respects the `SECRETARY_LOG` environment variable for filtering and
/// defaults to `info`. Calling it twice is harmless; the second call keeps
/// the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
