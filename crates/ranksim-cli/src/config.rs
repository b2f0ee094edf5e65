//! Run configuration
//!
//! A YAML document with the replication count, the three distribution
//! parameters, and the ordered list of sample sizes. Loading fails fast on a
//! missing file, a malformed document, or out-of-range values: no simulation
//! work starts from a bad configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use ranksim_core::{Error, Result};

/// Parsed and validated run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Number of Monte Carlo replications per sample size
    pub nb_simu: usize,
    /// Exponential rate of X
    pub lambda_x: f64,
    /// Exponential rate of Z
    pub lambda_z: f64,
    /// Pareto shape of Y
    pub alpha_y: f64,
    /// Ordered list of sample sizes to evaluate
    pub sample_size: Vec<usize>,
}

impl SimulationConfig {
    /// Load and validate the configuration at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| Error::InvalidInput(format!("malformed configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.nb_simu == 0 {
            return Err(Error::InvalidParameter(
                "nb_simu must be a positive integer".to_string(),
            ));
        }
        for (name, value) in [
            ("lambda_x", self.lambda_x),
            ("lambda_z", self.lambda_z),
            ("alpha_y", self.alpha_y),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if self.sample_size.is_empty() {
            return Err(Error::InvalidParameter(
                "sample_size must list at least one sample size".to_string(),
            ));
        }
        if self.sample_size.iter().any(|&n| n == 0) {
            return Err(Error::InvalidParameter(
                "sample sizes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// File-name stem identifying this configuration, shared by the text log
    /// and the serialized results
    pub fn output_stem(&self) -> String {
        format!(
            "simulations_B={}_lambda_x={}_lambda_z={}_alpha_y={}",
            self.nb_simu, self.lambda_x, self.lambda_z, self.alpha_y
        )
    }
}
