//! Performance aggregation
//!
//! Turns the finalized estimate and standard-error matrices into the
//! per-variant summary statistics of the study. Two conventions are lifted
//! straight from the historical analysis code and kept on purpose:
//!
//! - the coverage rate studentizes each replication by its *own* standard
//!   error, while the confidence-interval size uses the variant-*mean*
//!   standard error;
//! - the reported RMSE is the dispersion of the centered error (sample
//!   standard deviation, `ddof = 1`), not the root of the mean squared error.

use statrs::distribution::{ContinuousCDF, Normal};

use ranksim_core::{Error, Result, NB_VARIANTS};
use ranksim_engine::ResultMatrix;

use crate::report::{PerformanceReport, VariantMetrics};

/// Aggregate retained replications into a [`PerformanceReport`].
///
/// `estimates` and `std_errors` must be the finalized (NaN-free, row-aligned)
/// matrices of one sample-size run. With zero retained rows the report
/// carries `metrics: None` instead of statistics computed from nothing.
pub fn performance_report(
    estimates: &ResultMatrix,
    theta0: f64,
    n_obs: usize,
    std_errors: &ResultMatrix,
) -> Result<PerformanceReport> {
    if estimates.n_variants() != NB_VARIANTS || std_errors.n_variants() != NB_VARIANTS {
        return Err(Error::size_mismatch(
            NB_VARIANTS,
            estimates.n_variants(),
            "report matrices",
        ));
    }
    if estimates.n_rows() != std_errors.n_rows() {
        return Err(Error::InvalidInput(
            "estimate and standard-error matrices must have the same number of rows".to_string(),
        ));
    }

    let n_simu = estimates.n_rows();
    if n_simu == 0 {
        return Ok(PerformanceReport {
            theta0,
            n_obs,
            n_simu: 0,
            metrics: None,
        });
    }

    let z975 = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))?
        .inverse_cdf(0.975);
    let sqrt_n = (n_obs as f64).sqrt();

    let mut metrics = [VariantMetrics {
        bias: 0.0,
        mae: 0.0,
        rmse: 0.0,
        coverage: 0.0,
        quantile95: 0.0,
        ci_size: 0.0,
    }; NB_VARIANTS];

    for (k, entry) in metrics.iter_mut().enumerate() {
        let errors: Vec<f64> = estimates
            .column(k)
            .iter()
            .map(|est| est - theta0)
            .collect();
        let sigmas = std_errors.column(k);

        let covered = errors
            .iter()
            .zip(&sigmas)
            .filter(|(err, sigma)| (*err / *sigma).abs() < z975)
            .count();

        let scaled: Vec<f64> = errors.iter().map(|err| sqrt_n * err).collect();

        *entry = VariantMetrics {
            bias: mean(&errors),
            mae: mean(&errors.iter().map(|e| e.abs()).collect::<Vec<_>>()),
            rmse: sample_sd(&errors),
            coverage: covered as f64 / n_simu as f64,
            quantile95: percentile(&scaled, 0.95),
            ci_size: 2.0 * z975 * mean(&sigmas),
        };
    }

    Ok(PerformanceReport {
        theta0,
        n_obs,
        n_simu,
        metrics: Some(metrics),
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with `ddof = 1`; NaN for fewer than two values.
fn sample_sd(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss = values.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Empirical quantile with linear interpolation between order statistics.
fn percentile(values: &[f64], q: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&q));
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{Distribution, Normal as NormalNoise};

    const Z975: f64 = 1.959963984540054;

    fn constant_matrices(value: f64, sigma: f64, n_rows: usize) -> (ResultMatrix, ResultMatrix) {
        let mut est = ResultMatrix::new(NB_VARIANTS);
        let mut se = ResultMatrix::new(NB_VARIANTS);
        for _ in 0..n_rows {
            est.push_row(&[value; NB_VARIANTS]).unwrap();
            se.push_row(&[sigma; NB_VARIANTS]).unwrap();
        }
        (est, se)
    }

    #[test]
    fn test_exact_estimator_scores_perfectly() {
        // 200 replications of theta_hat = theta0 = 1.0, sigma_hat = 0.1
        let (est, se) = constant_matrices(1.0, 0.1, 200);
        let report = performance_report(&est, 1.0, 500, &se).unwrap();

        assert_eq!(report.n_simu, 200);
        assert_eq!(report.n_obs, 500);
        for k in 0..NB_VARIANTS {
            let m = report.variant(k).unwrap();
            assert_abs_diff_eq!(m.bias, 0.0);
            assert_abs_diff_eq!(m.mae, 0.0);
            assert_abs_diff_eq!(m.rmse, 0.0);
            assert_relative_eq!(m.coverage, 1.0);
            assert_abs_diff_eq!(m.quantile95, 0.0);
            assert_relative_eq!(m.ci_size, 2.0 * Z975 * 0.1, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_retained_rows_yield_empty_metrics() {
        let (est, se) = constant_matrices(1.0, 0.1, 0);
        let report = performance_report(&est, 1.0, 500, &se).unwrap();
        assert_eq!(report.n_simu, 0);
        assert!(report.metrics.is_none());
        assert!(report.variant(0).is_none());
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let (est, _) = constant_matrices(1.0, 0.1, 10);
        let (_, se) = constant_matrices(1.0, 0.1, 9);
        assert!(performance_report(&est, 1.0, 500, &se).is_err());
    }

    #[test]
    fn test_known_bias_and_mae() {
        // Errors alternate +0.2 / -0.2: bias 0, MAE 0.2
        let mut est = ResultMatrix::new(NB_VARIANTS);
        let mut se = ResultMatrix::new(NB_VARIANTS);
        for b in 0..100 {
            let v = if b % 2 == 0 { 1.2 } else { 0.8 };
            est.push_row(&[v; NB_VARIANTS]).unwrap();
            se.push_row(&[0.5; NB_VARIANTS]).unwrap();
        }
        let report = performance_report(&est, 1.0, 100, &se).unwrap();
        let m = report.variant(0).unwrap();
        assert_abs_diff_eq!(m.bias, 0.0, epsilon = 1e-12);
        assert_relative_eq!(m.mae, 0.2, epsilon = 1e-12);
        // Sample sd of +-0.2 over 100 values: sqrt(100/99 * 0.04)
        assert_relative_eq!(m.rmse, (0.04_f64 * 100.0 / 99.0).sqrt(), epsilon = 1e-12);
        // |0.2 / 0.5| = 0.4 < z: always covered
        assert_relative_eq!(m.coverage, 1.0);
    }

    #[test]
    fn test_coverage_calibration_approaches_nominal_level() {
        // Estimates drawn from Normal(theta0, sigma) with sigma reported
        // exactly: coverage must approach 0.95.
        let theta0 = 1.0;
        let sigma = 0.1;
        let nb_simu = 2000;

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let noise = NormalNoise::new(0.0, sigma).unwrap();

        let mut est = ResultMatrix::new(NB_VARIANTS);
        let mut se = ResultMatrix::new(NB_VARIANTS);
        for _ in 0..nb_simu {
            let draw: f64 = theta0 + noise.sample(&mut rng);
            est.push_row(&[draw; NB_VARIANTS]).unwrap();
            se.push_row(&[sigma; NB_VARIANTS]).unwrap();
        }

        let report = performance_report(&est, theta0, 500, &se).unwrap();
        let coverage = report.variant(0).unwrap().coverage;
        assert!(
            (coverage - 0.95).abs() < 0.02,
            "coverage {coverage} too far from nominal 0.95"
        );
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(percentile(&values, 0.5), 3.0);
        assert_relative_eq!(percentile(&values, 0.0), 1.0);
        assert_relative_eq!(percentile(&values, 1.0), 5.0);
        // h = 4 * 0.95 = 3.8 between 4.0 and 5.0
        assert_relative_eq!(percentile(&values, 0.95), 4.8);
    }

    #[test]
    fn test_quantile95_scales_with_sample_size() {
        let mut est = ResultMatrix::new(NB_VARIANTS);
        let mut se = ResultMatrix::new(NB_VARIANTS);
        for _ in 0..50 {
            est.push_row(&[1.5; NB_VARIANTS]).unwrap();
            se.push_row(&[0.1; NB_VARIANTS]).unwrap();
        }
        // Constant error 0.5, so quantile95 = sqrt(n) * 0.5
        let report = performance_report(&est, 1.0, 400, &se).unwrap();
        assert_relative_eq!(report.variant(0).unwrap().quantile95, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_sd_matches_pandas_ddof() {
        assert_relative_eq!(sample_sd(&[1.0, 2.0, 3.0, 4.0]), (5.0_f64 / 3.0).sqrt());
        assert!(sample_sd(&[1.0]).is_nan());
    }
}
