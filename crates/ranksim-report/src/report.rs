//! Report types
//!
//! A report is a fixed record rather than a string-keyed map: every metric
//! exists for every variant by construction, and the variant order is the
//! shared order from `ranksim_core::VARIANTS`.

use serde::{Deserialize, Serialize};

use ranksim_core::{NB_VARIANTS, VARIANTS};

/// Summary statistics for one estimator variant over the retained
/// replications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantMetrics {
    /// Mean of `estimate - theta0`
    pub bias: f64,
    /// Mean of `|estimate - theta0|`
    pub mae: f64,
    /// Sample standard deviation of `estimate - theta0`
    pub rmse: f64,
    /// Empirical coverage rate of the nominal 95% confidence interval
    pub coverage: f64,
    /// 95th percentile of `sqrt(n_obs) * (estimate - theta0)`
    pub quantile95: f64,
    /// Average nominal 95% confidence-interval width
    pub ci_size: f64,
}

/// Performance report for one sample size.
///
/// `metrics` is `None` when no replication survived validation: the sample
/// size is still reported (with its retained count of zero) but no statistic
/// is fabricated from an empty set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Analytical ground truth the estimates are scored against
    pub theta0: f64,
    /// Sample size used for every replication
    pub n_obs: usize,
    /// Number of replications retained after discarding degenerate ones
    pub n_simu: usize,
    /// Per-variant metrics in `VARIANTS` order; `None` when `n_simu == 0`
    pub metrics: Option<[VariantMetrics; NB_VARIANTS]>,
}

impl PerformanceReport {
    /// Metrics for the variant at index `k` in `VARIANTS` order
    pub fn variant(&self, k: usize) -> Option<&VariantMetrics> {
        self.metrics.as_ref().map(|m| &m[k])
    }

    /// Metrics looked up by variant name
    pub fn variant_by_name(&self, name: &str) -> Option<&VariantMetrics> {
        let k = VARIANTS.iter().position(|v| v.name == name)?;
        self.variant(k)
    }
}

/// Reports for a whole run, one entry per configured sample size.
///
/// Entries keep the configured order, which a sorted map would not, so the
/// serialized object and every iteration reproduce the run configuration
/// faithfully.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunResults {
    entries: Vec<RunEntry>,
}

/// A report keyed by its sample size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    /// Configured sample size
    pub sample_size: usize,
    /// Report produced for that sample size
    pub report: PerformanceReport,
}

impl RunResults {
    /// Empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the report for one sample size, preserving insertion order
    pub fn insert(&mut self, sample_size: usize, report: PerformanceReport) {
        self.entries.push(RunEntry {
            sample_size,
            report,
        });
    }

    /// Look up the report for a sample size
    pub fn get(&self, sample_size: usize) -> Option<&PerformanceReport> {
        self.entries
            .iter()
            .find(|e| e.sample_size == sample_size)
            .map(|e| &e.report)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RunEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no report has been inserted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_report(n_obs: usize) -> PerformanceReport {
        PerformanceReport {
            theta0: 1.0,
            n_obs,
            n_simu: 0,
            metrics: None,
        }
    }

    #[test]
    fn test_run_results_preserve_insertion_order() {
        let mut results = RunResults::new();
        // Deliberately unsorted configuration order
        for &n in &[500usize, 100, 1000] {
            results.insert(n, dummy_report(n));
        }
        let order: Vec<usize> = results.iter().map(|e| e.sample_size).collect();
        assert_eq!(order, vec![500, 100, 1000]);
        assert_eq!(results.len(), 3);
        assert_eq!(results.get(100).unwrap().n_obs, 100);
        assert!(results.get(250).is_none());
    }

    #[test]
    fn test_variant_lookup_by_name() {
        let metrics = VariantMetrics {
            bias: 0.0,
            mae: 0.0,
            rmse: 0.0,
            coverage: 1.0,
            quantile95: 0.0,
            ci_size: 0.1,
        };
        let report = PerformanceReport {
            theta0: 1.0,
            n_obs: 500,
            n_simu: 200,
            metrics: Some([metrics; NB_VARIANTS]),
        };
        assert!(report.variant_by_name("smooth_ls").is_some());
        assert!(report.variant_by_name("no_such_variant").is_none());
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let metrics = VariantMetrics {
            bias: 0.01,
            mae: 0.02,
            rmse: 0.03,
            coverage: 0.94,
            quantile95: 1.5,
            ci_size: 0.2,
        };
        let mut results = RunResults::new();
        results.insert(
            500,
            PerformanceReport {
                theta0: 1.0,
                n_obs: 500,
                n_simu: 198,
                metrics: Some([metrics; NB_VARIANTS]),
            },
        );

        let json = serde_json::to_string(&results).unwrap();
        let back: RunResults = serde_json::from_str(&json).unwrap();
        assert_eq!(results, back);
    }
}
