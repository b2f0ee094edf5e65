//! Monte Carlo evaluation of rank-based estimators
//!
//! Evaluates competing estimators of a rank-based average under a
//! three-variable data-generating process (Y Pareto, Z Exponential,
//! X Exponential) combined through an unobserved-rank transform. Synthetic
//! samples are drawn repeatedly, each estimator variant is scored against
//! the analytical ground truth, and per-sample-size performance reports
//! (bias, MAE, RMSE, coverage, quantile behavior) are produced.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`ranksim_core`]: distributions, ground truth, data generation, the
//!   estimator interface, and the shared error type
//! - [`ranksim_estimators`]: reference implementations of the rank-based
//!   estimator variants
//! - [`ranksim_engine`]: result matrices and the replication loop
//! - [`ranksim_report`]: aggregation, report types, rendering, and
//!   histograms
//!
//! The `ranksim` binary (in `ranksim-cli`) drives a full run from a YAML
//! configuration.

pub use ranksim_core;
pub use ranksim_engine;
pub use ranksim_estimators;
pub use ranksim_report;

// Convenience re-exports for the common flow
pub use ranksim_core::{
    analytical_theta, DataGenerator, Error, Marginal, RankEstimator, RegimeDiagnostics, Result,
    VARIANTS,
};
pub use ranksim_engine::{MonteCarlo, RunOutcome};
pub use ranksim_estimators::UnknownRanks;
pub use ranksim_report::{performance_report, PerformanceReport, RunResults};
