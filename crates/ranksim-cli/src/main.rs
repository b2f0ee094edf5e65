//! `ranksim` binary entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use ranksim_cli::{Driver, SimulationConfig};
use ranksim_estimators::UnknownRanks;

/// Monte Carlo evaluation of rank-based estimators under an unobserved-rank
/// data-generating process.
#[derive(Debug, Parser)]
#[command(name = "ranksim", version)]
struct Cli {
    /// Path to the YAML configuration document
    config: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = SimulationConfig::load(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;

    Driver::new(config, PathBuf::from("output"))
        .run(UnknownRanks::new())
        .context("simulation run failed")?;

    Ok(())
}
