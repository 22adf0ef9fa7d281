//! Error type for simulator setup.

/// Errors raised while validating a simulation configuration.
///
/// Steady-state operation has no failure paths; everything here is a
/// misconfiguration caught before the first trial runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The pool is too small to make a stopping decision.
    #[error("pool size must be at least 2, got {pool_size}")]
    PoolTooSmall {
        /// Configured pool size.
        pool_size: usize,
    },

    /// The histogram has no bins.
    #[error("bin count must be at least 1")]
    NoBins,

    /// More bins than reachable reject fractions.
    #[error(
        "bin count {bin_count} must be less than pool size {pool_size}; \
         reject fractions are quantized to 1/{pool_size} and extra bins would stay empty"
    )]
    TooManyBins {
        /// Configured bin count.
        bin_count: usize,
        /// Configured pool size.
        pool_size: usize,
    },

    /// Smoothing window of zero bins.
    #[error("smoothing window must be at least 1 bin")]
    EmptyWindow,

    /// Smoothing window wider than the histogram.
    #[error("smoothing window {window} exceeds bin count {bin_count}")]
    WindowTooWide {
        /// Configured window width.
        window: usize,
        /// Configured bin count.
        bin_count: usize,
    },
}

/// Result alias for fallible setup operations.
pub type Result<T> = std::result::Result<T, Error>;
