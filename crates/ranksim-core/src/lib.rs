//! Core types for the unobserved-ranks Monte Carlo study
//!
//! This crate holds the pieces every other `ranksim` crate builds on:
//!
//! - **Distribution specs**: a closed enum of the marginals the
//!   data-generating process supports, with closed-form quantile and CDF
//! - **Ground truth**: the analytical value of the target functional and the
//!   validity diagnostics derived from the configured parameters
//! - **Data generator**: inverse-CDF sampling of the (Y, Z, X) triple from
//!   a caller-owned RNG
//! - **Estimator interface**: the adapter trait the replication loop
//!   invokes, plus the fixed ordered list of evaluated variants
//! - **Errors**: the unified `Error`/`Result` pair used across the workspace

mod distribution;
mod error;
mod estimator;
mod generate;
mod theory;

pub use distribution::Marginal;
pub use error::{Error, Result};
pub use estimator::{Estimate, Method, RankEstimator, SeMethod, Variant, NB_VARIANTS, VARIANTS};
pub use generate::{DataGenerator, TripleSample};
pub use theory::{analytical_theta, RegimeDiagnostics};
