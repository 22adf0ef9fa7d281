//! Runs the secretary-problem estimator until interrupted.

use std::process::ExitCode;

use secretary_sim::logging::init_tracing;
use secretary_sim::{Config, Simulator, TerminalObserver};
use tracing::error;

fn main() -> ExitCode {
    init_tracing();

    let config = Config::default();
    let bin_count = config.bin_count;

    let mut simulation = match Simulator::with_config(config).start() {
        Ok(simulation) => simulation,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    println!("Simulation of the secretary problem");
    println!("Number of bins: {}", bin_count);

    let mut observer = TerminalObserver::new();
    match simulation.run(&mut observer) {
        Ok(never) => match never {},
        Err(err) => {
            error!(%err, "simulation stopped");
            ExitCode::FAILURE
        }
    }
}
