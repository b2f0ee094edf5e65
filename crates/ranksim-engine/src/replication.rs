//! Monte Carlo replication loop
//!
//! For one sample size the loop repeats draw → estimate `nb_simu` times,
//! invoking the estimator adapter once per (replication, variant) pair in the
//! fixed variant order. Replications with any non-finite standard error, any
//! undefined entry, or a failed estimator call are discarded whole before the
//! matrices are handed to the aggregator.
//!
//! The RNG is an owned `ChaCha8Rng` reseeded from the configured seed at the
//! start of every run, so results are reproducible per sample size and
//! independent across sample sizes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use ranksim_core::{DataGenerator, Estimate, RankEstimator, Result, NB_VARIANTS, VARIANTS};

use crate::matrix::{drop_poisoned_rows, ResultMatrix};

/// Default RNG seed, matching the historical simulation scripts.
pub const DEFAULT_SEED: u64 = 999;

/// Finalized output of one sample-size run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Retained point estimates, replications × variants
    pub estimates: ResultMatrix,
    /// Retained standard errors, aligned row by row with `estimates`
    pub std_errors: ResultMatrix,
    /// Number of replications discarded as degenerate
    pub nb_discarded: usize,
}

impl RunOutcome {
    /// Number of replications retained for reporting
    pub fn nb_retained(&self) -> usize {
        self.estimates.n_rows()
    }
}

/// Replication loop driver for a fixed data-generating process.
#[derive(Debug, Clone)]
pub struct MonteCarlo<E> {
    generator: DataGenerator,
    estimator: E,
    nb_simu: usize,
    seed: u64,
}

impl<E: RankEstimator> MonteCarlo<E> {
    /// Create a loop running `nb_simu` replications with the default seed
    pub fn new(generator: DataGenerator, estimator: E, nb_simu: usize) -> Self {
        Self {
            generator,
            estimator,
            nb_simu,
            seed: DEFAULT_SEED,
        }
    }

    /// Override the RNG seed used at the start of each run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run all replications for one sample size.
    pub fn run(&self, sample_size: usize) -> Result<RunOutcome> {
        self.run_with_progress(sample_size, |_| {})
    }

    /// Run all replications, reporting each completed replication index to
    /// `progress`. The callback observes a monotonically increasing counter
    /// and has no influence on the computed matrices.
    pub fn run_with_progress<F>(&self, sample_size: usize, mut progress: F) -> Result<RunOutcome>
    where
        F: FnMut(usize),
    {
        info!(
            nb_simu = self.nb_simu,
            sample_size, seed = self.seed, "starting replication loop"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut estimates = ResultMatrix::with_capacity(NB_VARIANTS, self.nb_simu);
        let mut std_errors = ResultMatrix::with_capacity(NB_VARIANTS, self.nb_simu);

        for b in 0..self.nb_simu {
            let sample = self.generator.draw(&mut rng, sample_size);

            let mut theta_row = [0.0_f64; NB_VARIANTS];
            let mut sigma_row = [0.0_f64; NB_VARIANTS];
            let mut degenerate = false;

            for (k, variant) in VARIANTS.iter().enumerate() {
                match self.estimator.estimate(
                    &sample.y,
                    &sample.x,
                    &sample.z,
                    variant.method,
                    variant.se_method,
                ) {
                    Ok(Estimate {
                        theta_hat,
                        sigma_hat,
                    }) => {
                        theta_row[k] = theta_hat;
                        sigma_row[k] = sigma_hat;
                        if theta_hat.is_nan() || !sigma_hat.is_finite() {
                            degenerate = true;
                        }
                    }
                    Err(e) => {
                        warn!(replication = b, variant = variant.name, error = %e,
                              "estimator failed, dropping replication");
                        theta_row[k] = f64::NAN;
                        sigma_row[k] = f64::NAN;
                        degenerate = true;
                    }
                }
            }

            estimates.push_row(&theta_row)?;
            std_errors.push_row(&sigma_row)?;

            // A degenerate entry never contributes partially: the whole
            // replication is poisoned in both matrices.
            if degenerate {
                warn!(replication = b, "degenerate replication discarded");
                estimates.poison_row(b);
                std_errors.poison_row(b);
            }

            debug!(replication = b, "replication complete");
            progress(b + 1);
        }

        let (estimates, std_errors, nb_discarded) = drop_poisoned_rows(&estimates, &std_errors)?;
        info!(
            nb_retained = estimates.n_rows(),
            nb_discarded, "replication loop finished"
        );

        Ok(RunOutcome {
            estimates,
            std_errors,
            nb_discarded,
        })
    }
}
