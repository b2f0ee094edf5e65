//! Plug-in estimator of the target functional under unobserved ranks
//!
//! The target is `theta = E[ Q_y(F_z(X)) ]`. The estimator replaces both
//! rank functions with their sample versions and averages over the observed
//! X values:
//!
//! ```text
//! theta_hat = (1/n) sum_i Qhat_y( Fhat_z(x_i) )
//! ```
//!
//! `Standard` uses the step-function ECDF and empirical quantile; `Smoothed`
//! uses linearly interpolated versions of both.
//!
//! Standard errors combine the outer variance of the transformed values with
//! a quantile-process delta-method term `p(1-p) / f_y(Q_y(p))^2`, where the
//! density of Y is estimated either by a Gaussian KDE (`Kernel`) or by
//! order-statistic spacings (`LewbelSchennach`). `Xavier` keeps the outer
//! variance only. Thin-tail density estimates can push the correction to
//! infinity; the resulting non-finite standard error is the caller's signal
//! to discard the replication.

use ranksim_core::{Error, Estimate, Method, RankEstimator, Result, SeMethod};

use crate::ecdf::RankFunctions;
use crate::kde::KernelDensity;

/// Rank-based plug-in estimator with its standard-error variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownRanks;

impl UnknownRanks {
    /// Create the estimator
    pub fn new() -> Self {
        Self
    }
}

impl RankEstimator for UnknownRanks {
    fn estimate(
        &self,
        y: &[f64],
        x: &[f64],
        z: &[f64],
        method: Method,
        se_method: SeMethod,
    ) -> Result<Estimate> {
        let n = y.len();
        if x.len() != n {
            return Err(Error::size_mismatch(n, x.len(), "x sample"));
        }
        if z.len() != n {
            return Err(Error::size_mismatch(n, z.len(), "z sample"));
        }
        let ranks_y = RankFunctions::new(y)?;
        let ranks_z = RankFunctions::new(z)?;

        // Estimated ranks of the x observations through Z, then pushed
        // through Y's quantile function.
        let ranks: Vec<f64> = match method {
            Method::Standard => x.iter().map(|&xi| ranks_z.ecdf(xi)).collect(),
            Method::Smoothed => x.iter().map(|&xi| ranks_z.smoothed_ecdf(xi)).collect(),
        };
        let transformed: Vec<f64> = match method {
            Method::Standard => ranks.iter().map(|&p| ranks_y.quantile(p)).collect(),
            Method::Smoothed => ranks.iter().map(|&p| ranks_y.smoothed_quantile(p)).collect(),
        };

        let theta_hat = transformed.iter().sum::<f64>() / n as f64;
        let sigma_hat = standard_error(&ranks_y, &ranks, &transformed, se_method)?;

        Ok(Estimate {
            theta_hat,
            sigma_hat,
        })
    }
}

fn standard_error(
    ranks_y: &RankFunctions,
    ranks: &[f64],
    transformed: &[f64],
    se_method: SeMethod,
) -> Result<f64> {
    let n = transformed.len() as f64;
    let mean = transformed.iter().sum::<f64>() / n;
    let outer_var = transformed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    let variance = match se_method {
        SeMethod::Xavier => outer_var / n,
        SeMethod::Kernel => {
            let kde = KernelDensity::fit(ranks_y.sorted())?;
            let correction =
                quantile_process_term(ranks, transformed, |_p, v| kde.density(v));
            outer_var / n + correction / (n * n)
        }
        SeMethod::LewbelSchennach => {
            let correction = quantile_process_term(ranks, transformed, |p, _v| {
                ranks_y.spacing_density(p)
            });
            outer_var / n + correction / (n * n)
        }
    };

    Ok(variance.sqrt())
}

/// `sum_i p_i (1 - p_i) / f(Q(p_i))^2` with a pluggable density estimate.
///
/// A vanishing density estimate sends the term to infinity; this is passed
/// through untouched so the replication can be flagged as degenerate.
fn quantile_process_term<F>(ranks: &[f64], transformed: &[f64], density: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    ranks
        .iter()
        .zip(transformed)
        .map(|(&p, &v)| {
            let f = density(p, v);
            p * (1.0 - p) / (f * f)
        })
        .sum()
}
