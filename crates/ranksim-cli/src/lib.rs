//! Command-line driver for the unobserved-ranks Monte Carlo study
//!
//! Loads a YAML run configuration, executes the replication loop for every
//! configured sample size, and writes the text log, the serialized report
//! mapping, and the optional diagnostic histograms under `output/`.

mod config;
mod driver;

pub use config::SimulationConfig;
pub use driver::Driver;
