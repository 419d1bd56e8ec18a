use clap::Parser;
use env_logger::Env;
use log::info;

use windgrid::cli::Args;
use windgrid::config::{host_cpus, RunConfig};
use windgrid::{pipeline, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("=== Wind Speed Grid ===");

    let host_cpus = host_cpus();
    let config = RunConfig::from_args(args, host_cpus)?;

    info!(
        "Source area: {:?} m, target area: {:?} m, target offset: {:?}",
        config.source_area, config.target_area, config.target_offset
    );
    info!(
        "Rescale: {}, workers: {} of {}",
        config.rescale, config.nprocs, host_cpus
    );

    let output = pipeline::process(&config)?;

    info!("Output: {}", output.display());
    info!("=== Done! ===");
    Ok(())
}
