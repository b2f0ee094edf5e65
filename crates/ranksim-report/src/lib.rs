//! Performance reporting for the unobserved-ranks Monte Carlo study
//!
//! Consumes the finalized matrices of a sample-size run and produces:
//!
//! - a [`PerformanceReport`] with bias, MAE, RMSE, coverage rate, the 95th
//!   percentile of the rescaled error, and the average confidence-interval
//!   width, per estimator variant;
//! - text blocks for console and log-file emission;
//! - optional per-variant diagnostic histograms against the fitted normal.
//!
//! All aggregation is pure; rendering and file output never feed back into
//! the report values.

mod aggregate;
mod plot;
mod render;
mod report;

pub use aggregate::performance_report;
pub use plot::{compute_bins, save_histograms, Bin};
pub use render::{render_parameter_echo, render_report};
pub use report::{PerformanceReport, RunEntry, RunResults, VariantMetrics};
