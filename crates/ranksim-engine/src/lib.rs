//! Monte Carlo replication engine for the unobserved-ranks study
//!
//! The engine owns the repetition structure of the simulation: it draws
//! synthetic samples, invokes the estimator adapter once per
//! (replication, variant) pair, validates each replication as a whole, and
//! hands finalized matrices to the reporting layer.
//!
//! Degenerate replications (estimator failure, NaN estimate, non-finite
//! standard error) are discarded atomically: either every entry of a
//! replication reaches the aggregator or none does.

mod matrix;
mod replication;

pub use matrix::{drop_poisoned_rows, ResultMatrix};
pub use replication::{MonteCarlo, RunOutcome, DEFAULT_SEED};
