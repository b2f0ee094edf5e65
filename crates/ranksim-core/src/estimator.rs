//! Estimator-adapter interface
//!
//! The simulation engine treats the rank-based point estimators as opaque:
//! anything implementing [`RankEstimator`] can be evaluated. The engine only
//! relies on the contract that a variant returns a point estimate together
//! with a standard-error estimate, and that a non-finite standard error marks
//! the replication as degenerate.
//!
//! The five evaluated variants and their order are fixed here and shared by
//! the result matrices and every report field, so variant/column alignment
//! cannot drift between components.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Point-estimation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Empirical (step-function) rank functions
    Standard,
    /// Smoothed (interpolated) rank functions
    Smoothed,
}

/// Standard-error estimation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeMethod {
    /// Plug-in outer variance only
    Xavier,
    /// Quantile-process correction with a kernel density estimate
    Kernel,
    /// Quantile-process correction with order-statistic spacings
    LewbelSchennach,
}

/// A point estimate paired with its standard-error estimate.
///
/// `sigma_hat` may be non-finite; the engine interprets that as a degenerate
/// replication rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Point estimate of the target functional
    pub theta_hat: f64,
    /// Estimated standard error of the point estimate
    pub sigma_hat: f64,
}

/// Interface the replication loop consumes.
///
/// Implementations receive the three generated sample vectors and must be
/// free of side effects observable by the engine. Returning an error (for
/// example on an empty sample) is recoverable: the engine discards the
/// replication and continues.
pub trait RankEstimator {
    /// Estimate the target functional and its standard error
    fn estimate(
        &self,
        y: &[f64],
        x: &[f64],
        z: &[f64],
        method: Method,
        se_method: SeMethod,
    ) -> Result<Estimate>;
}

/// One evaluated estimator variant: a (method, SE method) pair with the
/// column name used in reports and output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Column name used in reports and output files
    pub name: &'static str,
    /// Point-estimation method
    pub method: Method,
    /// Standard-error method
    pub se_method: SeMethod,
}

/// The fixed, ordered list of evaluated variants.
///
/// This ordering defines the column layout of the estimate and
/// standard-error matrices and of every per-variant report field.
pub const VARIANTS: [Variant; 5] = [
    Variant {
        name: "standard_kernel",
        method: Method::Standard,
        se_method: SeMethod::Kernel,
    },
    Variant {
        name: "standard_xavier",
        method: Method::Standard,
        se_method: SeMethod::Xavier,
    },
    Variant {
        name: "smooth_kernel",
        method: Method::Smoothed,
        se_method: SeMethod::Kernel,
    },
    Variant {
        name: "smooth_ls",
        method: Method::Smoothed,
        se_method: SeMethod::LewbelSchennach,
    },
    Variant {
        name: "smooth_xavier",
        method: Method::Smoothed,
        se_method: SeMethod::Xavier,
    },
];

/// Number of evaluated variants
pub const NB_VARIANTS: usize = VARIANTS.len();
