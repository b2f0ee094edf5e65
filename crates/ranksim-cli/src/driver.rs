//! Run orchestration
//!
//! The driver owns everything around the core loop: output directories, the
//! append-only text log, the startup parameter echo, one replication run and
//! report per configured sample size, and the final serialized results
//! object. Statistical anomalies inside a run never abort it; configuration
//! and I/O failures do.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use ranksim_core::{analytical_theta, DataGenerator, Marginal, RankEstimator, RegimeDiagnostics, Result};
use ranksim_engine::MonteCarlo;
use ranksim_report::{performance_report, render_parameter_echo, render_report, save_histograms, RunResults};

use crate::config::SimulationConfig;

/// Orchestrates a full simulation run from a validated configuration.
#[derive(Debug, Clone)]
pub struct Driver {
    config: SimulationConfig,
    output_dir: PathBuf,
    histograms: bool,
}

impl Driver {
    /// Create a driver writing artifacts under `output_dir`
    pub fn new(config: SimulationConfig, output_dir: PathBuf) -> Self {
        Self {
            config,
            output_dir,
            histograms: true,
        }
    }

    /// Enable or disable diagnostic histogram rendering
    pub fn with_histograms(mut self, histograms: bool) -> Self {
        self.histograms = histograms;
        self
    }

    /// Run every configured sample size and persist the collected reports.
    pub fn run<E: RankEstimator>(&self, estimator: E) -> Result<RunResults> {
        let config = &self.config;
        let raw_dir = self.output_dir.join("raw");
        fs::create_dir_all(&raw_dir)?;

        let stem = config.output_stem();
        let log_path = self.output_dir.join(format!("{stem}.txt"));

        let theta0 = analytical_theta(config.alpha_y, config.lambda_z, config.lambda_x);
        let diag = RegimeDiagnostics::new(config.alpha_y, config.lambda_z, config.lambda_x);
        diag.warn_if_outside_regime();

        let echo = render_parameter_echo(config.lambda_x, config.lambda_z, config.alpha_y, &diag);
        print!("{echo}");
        append(&log_path, "\n")?;
        append(&log_path, &echo)?;

        let generator = DataGenerator::new(
            Marginal::pareto(config.alpha_y, -1.0)?,
            Marginal::exponential(config.lambda_z)?,
            Marginal::exponential(config.lambda_x)?,
        );
        let monte_carlo = MonteCarlo::new(generator, estimator, config.nb_simu);

        let mut results = RunResults::new();
        for &sample_size in &config.sample_size {
            let banner = format!(
                "Running {} simulations with sample size {}...\n",
                config.nb_simu, sample_size
            );
            print!("{banner}");
            append(&log_path, &banner)?;

            let outcome = monte_carlo.run_with_progress(sample_size, |b| {
                eprint!("\r{b}");
            })?;
            eprintln!();
            info!(
                sample_size,
                nb_retained = outcome.nb_retained(),
                nb_discarded = outcome.nb_discarded,
                "sample size complete"
            );

            let report =
                performance_report(&outcome.estimates, theta0, sample_size, &outcome.std_errors)?;

            let block = render_report(&report);
            print!("{block}");
            append(&log_path, "\n")?;
            append(&log_path, &block)?;

            if self.histograms {
                save_histograms(
                    &outcome.estimates,
                    &outcome.std_errors,
                    theta0,
                    sample_size,
                    &self.output_dir.join(&stem),
                )?;
            }

            results.insert(sample_size, report);
        }

        let results_path = raw_dir.join(format!("{stem}.json"));
        serde_json::to_writer_pretty(File::create(&results_path)?, &results)
            .map_err(|e| ranksim_core::Error::Other(e.into()))?;
        info!(path = %results_path.display(), "run results persisted");

        Ok(results)
    }
}

fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
