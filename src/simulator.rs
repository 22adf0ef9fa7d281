//! Main `Simulator` entry point and the running `Simulation`.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::output::Observer;
use crate::result::Snapshot;
use crate::statistics::Histogram;
use crate::trial::{run_trial_in, CandidatePool};

/// Configures and starts a secretary-problem simulation.
///
/// Use the builder pattern to adjust the defaults, then call
/// [`start`](Self::start) to validate and get a runnable [`Simulation`].
///
/// # Example
///
/// ```ignore
/// use secretary_sim::Simulator;
///
/// let mut sim = Simulator::new()
///     .pool_size(500)
///     .bin_count(100)
///     .seed(7)
///     .start()?;
///
/// let snapshot = sim.run_trials(50_000, &mut |_: &_, _: &_| {})?;
/// println!("peak: {:?}", snapshot.peak);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    /// Create with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create with a small configuration for tests and benchmarks.
    ///
    /// Settings:
    /// - 200 candidates (vs 1,000 default)
    /// - 50 bins (vs 999 default)
    /// - 5-bin smoothing window (vs 25 default)
    pub fn quick() -> Self {
        Self {
            config: Config {
                pool_size: 200,
                bin_count: 50,
                smoothing_window: 5,
                ..Config::default()
            },
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the number of candidates per trial.
    pub fn pool_size(mut self, n: usize) -> Self {
        self.config.pool_size = n;
        self
    }

    /// Set the number of histogram bins.
    pub fn bin_count(mut self, n: usize) -> Self {
        self.config.bin_count = n;
        self
    }

    /// Set the moving-average window in bins.
    pub fn smoothing_window(mut self, bins: usize) -> Self {
        self.config.smoothing_window = bins;
        self
    }

    /// Set the time between observer ticks.
    pub fn redraw_interval(mut self, interval: Duration) -> Self {
        self.config.redraw_interval = interval;
        self
    }

    /// Use a deterministic RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate the configuration and set up a fresh simulation.
    ///
    /// # Errors
    ///
    /// Returns the first configuration constraint that is violated.
    pub fn start(self) -> Result<Simulation> {
        self.config.validate()?;

        let rng = match self.config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_os_rng(),
        };

        info!(
            pool_size = self.config.pool_size,
            bin_count = self.config.bin_count,
            smoothing_window = self.config.smoothing_window,
            redraw_interval_ms = self.config.redraw_interval.as_millis() as u64,
            seed = ?self.config.seed,
            "starting secretary simulation"
        );

        let now = Instant::now();
        Ok(Simulation {
            pool: CandidatePool::new(self.config.pool_size),
            histogram: Histogram::new(self.config.bin_count),
            next_observation: now + self.config.redraw_interval,
            started: now,
            rng,
            config: self.config,
        })
    }
}

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    /// Candidates rejected before leaping.
    pub reject_count: usize,
    /// `reject_count / pool_size`.
    pub reject_fraction: f64,
    /// Whether the overall best candidate was picked.
    pub success: bool,
}

/// A running simulation: RNG, candidate pool, histogram and observation clock.
///
/// Trials run one at a time on the caller's thread. After each trial the
/// observer is notified if the redraw deadline has passed.
#[derive(Debug)]
pub struct Simulation {
    config: Config,
    rng: Xoshiro256PlusPlus,
    pool: CandidatePool,
    histogram: Histogram,
    started: Instant,
    next_observation: Instant,
}

impl Simulation {
    /// Configuration this simulation was started with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Histogram accumulated so far.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Trials run so far.
    pub fn trials(&self) -> u64 {
        self.histogram.total_trials()
    }

    /// Run one trial with a uniformly drawn reject count and record it.
    pub fn step(&mut self) -> TrialRecord {
        let pool_size = self.config.pool_size;
        let reject_count = self.rng.random_range(0..pool_size);
        let reject_fraction = reject_count as f64 / pool_size as f64;

        let success = run_trial_in(&mut self.pool, reject_count, &mut self.rng);
        self.histogram.record_outcome(reject_fraction, success);

        TrialRecord {
            reject_count,
            reject_fraction,
            success,
        }
    }

    /// Current aggregated state.
    ///
    /// # Errors
    ///
    /// Only fails on a zero smoothing window, which `start` already rules out.
    pub fn snapshot(&self) -> Result<Snapshot> {
        Snapshot::from_histogram(
            &self.histogram,
            self.config.pool_size,
            self.config.smoothing_window,
            self.started.elapsed().as_secs_f64(),
        )
    }

    /// Notify the observer if the redraw deadline has passed.
    ///
    /// Returns whether an observation happened. The next deadline is set
    /// one redraw interval after now.
    pub fn observe_if_due<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Result<bool> {
        let now = Instant::now();
        if now < self.next_observation {
            return Ok(false);
        }

        let snapshot = self.snapshot()?;
        debug!(
            trials = snapshot.trials,
            peak_fraction = snapshot.peak.map(|p| p.reject_fraction),
            peak_probability = snapshot.peak.map(|p| p.probability),
            "observation tick"
        );
        observer.observe(&snapshot, &self.histogram);

        self.next_observation = now + self.config.redraw_interval;
        Ok(true)
    }

    /// Run `trials` trials, observing on the usual cadence, and return the
    /// final snapshot.
    ///
    /// # Errors
    ///
    /// Propagates snapshot errors (see [`snapshot`](Self::snapshot)).
    pub fn run_trials<O: Observer + ?Sized>(
        &mut self,
        trials: u64,
        observer: &mut O,
    ) -> Result<Snapshot> {
        for _ in 0..trials {
            self.step();
            self.observe_if_due(observer)?;
        }
        self.snapshot()
    }

    /// Run trials until the process is terminated.
    ///
    /// # Errors
    ///
    /// Propagates snapshot errors (see [`snapshot`](Self::snapshot)); never
    /// returns otherwise.
    pub fn run<O: Observer + ?Sized>(&mut self, observer: &mut O) -> Result<Infallible> {
        loop {
            self.step();
            self.observe_if_due(observer)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_builder_sets_config() {
        let sim = Simulator::new()
            .pool_size(300)
            .bin_count(30)
            .smoothing_window(4)
            .redraw_interval(Duration::from_millis(250))
            .seed(5);

        let config = sim.config();
        assert_eq!(config.pool_size, 300);
        assert_eq!(config.bin_count, 30);
        assert_eq!(config.smoothing_window, 4);
        assert_eq!(config.redraw_interval, Duration::from_millis(250));
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let err = Simulator::new().pool_size(10).bin_count(10).start().unwrap_err();
        assert_eq!(
            err,
            Error::TooManyBins {
                bin_count: 10,
                pool_size: 10
            }
        );
    }

    #[test]
    fn test_step_draws_valid_reject_count() {
        let mut sim = Simulator::quick().seed(1).start().unwrap();
        for _ in 0..1_000 {
            let record = sim.step();
            assert!(record.reject_count < 200);
            assert!((0.0..1.0).contains(&record.reject_fraction));
        }
        assert_eq!(sim.trials(), 1_000);
    }

    #[test]
    fn test_zero_interval_observes_every_trial() {
        let mut sim = Simulator::quick()
            .redraw_interval(Duration::ZERO)
            .seed(2)
            .start()
            .unwrap();

        let mut seen = Vec::new();
        let mut observer = |snapshot: &Snapshot, _: &Histogram| seen.push(snapshot.trials);
        sim.run_trials(25, &mut observer).unwrap();

        assert_eq!(seen, (1..=25).collect::<Vec<u64>>());
    }

    #[test]
    fn test_long_interval_never_observes() {
        let mut sim = Simulator::quick()
            .redraw_interval(Duration::from_secs(3600))
            .seed(3)
            .start()
            .unwrap();

        let mut ticks = 0;
        let mut observer = |_: &Snapshot, _: &Histogram| ticks += 1;
        let snapshot = sim.run_trials(500, &mut observer).unwrap();

        assert_eq!(ticks, 0);
        assert_eq!(snapshot.trials, 500);
    }

    #[test]
    fn test_same_seed_same_histogram() {
        let run = |seed| {
            let mut sim = Simulator::quick().seed(seed).start().unwrap();
            for _ in 0..2_000 {
                sim.step();
            }
            sim.histogram().clone()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }
}
