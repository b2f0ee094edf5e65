//! Gaussian kernel density estimation
//!
//! Plain Parzen–Rosenblatt estimator with Silverman's rule-of-thumb
//! bandwidth. Used by the kernel standard-error method to estimate the
//! density entering the quantile-process variance term.

use ranksim_core::{Error, Result};

const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

fn gaussian_kernel(t: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * t * t).exp()
}

/// Gaussian kernel density estimator over a fixed sample.
#[derive(Debug, Clone)]
pub struct KernelDensity {
    data: Vec<f64>,
    bandwidth: f64,
}

impl KernelDensity {
    /// Fit with Silverman's rule-of-thumb bandwidth `1.06 * sd * n^(-1/5)`
    pub fn fit(sample: &[f64]) -> Result<Self> {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        let sd = (sample.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
        if !sd.is_finite() || sd <= 0.0 {
            return Err(Error::Computation(
                "sample has no spread, cannot pick a bandwidth".to_string(),
            ));
        }
        let bandwidth = 1.06 * sd * n.powf(-0.2);
        Ok(Self {
            data: sample.to_vec(),
            bandwidth,
        })
    }

    /// Bandwidth in use
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density estimate at `x`
    pub fn density(&self, x: f64) -> f64 {
        let nh = self.data.len() as f64 * self.bandwidth;
        self.data
            .iter()
            .map(|&xi| gaussian_kernel((x - xi) / self.bandwidth))
            .sum::<f64>()
            / nh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_density_integrates_to_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sample: Vec<f64> = (0..500).map(|_| rng.gen::<f64>() * 4.0 - 2.0).collect();
        let kde = KernelDensity::fit(&sample).unwrap();

        // Trapezoid rule over a range well beyond the data
        let (a, b, steps) = (-6.0, 6.0, 2000);
        let h = (b - a) / steps as f64;
        let mut integral = 0.0;
        for i in 0..steps {
            let x0 = a + i as f64 * h;
            integral += 0.5 * (kde.density(x0) + kde.density(x0 + h)) * h;
        }
        assert_relative_eq!(integral, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_density_peaks_near_data() {
        let sample = vec![0.0, 0.1, -0.1, 0.05, -0.05, 0.2, -0.2];
        let kde = KernelDensity::fit(&sample).unwrap();
        assert!(kde.density(0.0) > kde.density(3.0));
        assert!(kde.density(3.0) >= 0.0);
    }

    #[test]
    fn test_degenerate_samples_rejected() {
        assert!(KernelDensity::fit(&[1.0]).is_err());
        assert!(KernelDensity::fit(&[2.0, 2.0, 2.0]).is_err());
    }
}
