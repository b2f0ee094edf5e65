//! Empirical and smoothed rank functions
//!
//! Both the step-function ECDF/quantile pair and their smoothed counterparts
//! built on `i / (n + 1)` plotting positions with linear interpolation
//! between order statistics.

use ranksim_core::{Error, Result};

/// Sorted-sample rank functions for one variable.
#[derive(Debug, Clone)]
pub struct RankFunctions {
    sorted: Vec<f64>,
}

impl RankFunctions {
    /// Build from a sample; requires at least two observations
    pub fn new(sample: &[f64]) -> Result<Self> {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample"));
        }
        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { sorted })
    }

    fn n(&self) -> usize {
        self.sorted.len()
    }

    /// Step-function ECDF: fraction of observations `<= t`
    pub fn ecdf(&self, t: f64) -> f64 {
        let count = self.sorted.partition_point(|&v| v <= t);
        count as f64 / self.n() as f64
    }

    /// Smoothed ECDF: linear interpolation through the plotting positions
    /// `(x_(i), i / (n + 1))`, clamped at the extreme order statistics
    pub fn smoothed_ecdf(&self, t: f64) -> f64 {
        let n = self.n();
        let denom = (n + 1) as f64;
        if t <= self.sorted[0] {
            return 1.0 / denom;
        }
        if t >= self.sorted[n - 1] {
            return n as f64 / denom;
        }
        // Largest i with x_(i) <= t; interpolate towards x_(i+1)
        let i = self.sorted.partition_point(|&v| v <= t);
        let (lo, hi) = (self.sorted[i - 1], self.sorted[i]);
        let frac = if hi > lo { (t - lo) / (hi - lo) } else { 0.0 };
        (i as f64 + frac) / denom
    }

    /// Empirical quantile: the order statistic of rank `ceil(p * n)`
    pub fn quantile(&self, p: f64) -> f64 {
        let n = self.n();
        let rank = (p * n as f64).ceil() as usize;
        self.sorted[rank.clamp(1, n) - 1]
    }

    /// Smoothed quantile: linear interpolation of the order statistics at
    /// plotting positions `i / (n + 1)`, clamped at the boundary positions
    pub fn smoothed_quantile(&self, p: f64) -> f64 {
        let n = self.n();
        let denom = (n + 1) as f64;
        let h = p * denom;
        if h <= 1.0 {
            return self.sorted[0];
        }
        if h >= n as f64 {
            return self.sorted[n - 1];
        }
        let lo = h.floor() as usize;
        let frac = h - lo as f64;
        self.sorted[lo - 1] + frac * (self.sorted[lo] - self.sorted[lo - 1])
    }

    /// Spacing-based density at the plotting position nearest `p`, following
    /// the ordered-data construction of Lewbel and Schennach:
    /// `(1 / (n + 1)) / (x_(j+1) - x_(j))`
    pub fn spacing_density(&self, p: f64) -> f64 {
        let n = self.n();
        let j = ((p * (n + 1) as f64).floor() as usize).clamp(1, n - 1);
        let gap = self.sorted[j] - self.sorted[j - 1];
        (1.0 / (n + 1) as f64) / gap
    }

    /// Borrow the sorted sample
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }
}
