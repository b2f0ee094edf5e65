//! Diagnostic histograms
//!
//! One histogram per estimator variant: the empirical distribution of
//! `sqrt(n_obs) * (estimate - theta0)` with the fitted centered normal
//! density overlaid, using `sqrt(n_obs)` times the variant's mean standard
//! error as scale. A variant with a degenerate scale or a collapsed
//! distribution is skipped rather than failing the run.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use statrs::distribution::{Continuous, Normal};
use tracing::debug;

use ranksim_core::{Error, Result, VARIANTS};
use ranksim_engine::ResultMatrix;

const NUM_BINS: usize = 50;

/// A histogram bin with its density normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Left edge (inclusive)
    pub left: f64,
    /// Right edge (exclusive, inclusive for the last bin)
    pub right: f64,
    /// `count / (total * width)`
    pub density: f64,
}

/// Equal-width density histogram over the data range.
///
/// Returns `None` when fewer than two points are available or the range has
/// zero width.
pub fn compute_bins(values: &[f64], num_bins: usize) -> Option<Vec<Bin>> {
    if values.len() < 2 || num_bins == 0 {
        return None;
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(max - min).is_finite() || max <= min {
        return None;
    }

    let width = (max - min) / num_bins as f64;
    let mut counts = vec![0usize; num_bins];
    for &v in values {
        let k = (((v - min) / width) as usize).min(num_bins - 1);
        counts[k] += 1;
    }

    let total = values.len() as f64;
    Some(
        counts
            .iter()
            .enumerate()
            .map(|(k, &count)| Bin {
                left: min + k as f64 * width,
                right: min + (k + 1) as f64 * width,
                density: count as f64 / (total * width),
            })
            .collect(),
    )
}

/// Save one histogram per variant next to `out_stem`.
///
/// File names follow `<out_stem>_n=<n_obs>_<variant>.png`. Returns the paths
/// actually written; skipped variants are logged and omitted.
pub fn save_histograms(
    estimates: &ResultMatrix,
    std_errors: &ResultMatrix,
    theta0: f64,
    n_obs: usize,
    out_stem: &Path,
) -> Result<Vec<PathBuf>> {
    let sqrt_n = (n_obs as f64).sqrt();
    let mut written = Vec::new();

    for (k, variant) in VARIANTS.iter().enumerate() {
        let scaled: Vec<f64> = estimates
            .column(k)
            .iter()
            .map(|est| sqrt_n * (est - theta0))
            .collect();
        let sigmas = std_errors.column(k);
        let scale = sqrt_n * sigmas.iter().sum::<f64>() / sigmas.len().max(1) as f64;

        let bins = match compute_bins(&scaled, NUM_BINS) {
            Some(bins) => bins,
            None => {
                debug!(variant = variant.name, "collapsed distribution, histogram skipped");
                continue;
            }
        };
        if !scale.is_finite() || scale <= 0.0 {
            debug!(variant = variant.name, scale, "degenerate scale, histogram skipped");
            continue;
        }

        let path = PathBuf::from(format!(
            "{}_n={}_{}.png",
            out_stem.display(),
            n_obs,
            variant.name
        ));
        draw_histogram(&path, variant.name, &bins, scale)
            .map_err(|e| Error::Computation(format!("histogram rendering failed: {e}")))?;
        written.push(path);
    }

    Ok(written)
}

fn draw_histogram(
    path: &Path,
    variant_name: &str,
    bins: &[Bin],
    scale: f64,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let normal = Normal::new(0.0, scale)?;

    let x_min = bins.first().map(|b| b.left).unwrap_or(-1.0);
    let x_max = bins.last().map(|b| b.right).unwrap_or(1.0);
    let pdf_points: Vec<(f64, f64)> = (0..=200)
        .map(|i| {
            let x = x_min + (x_max - x_min) * i as f64 / 200.0;
            (x, normal.pdf(x))
        })
        .collect();

    let y_max = bins
        .iter()
        .map(|b| b.density)
        .chain(pdf_points.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max)
        .max(1e-12)
        * 1.1;

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Histogram for model: {variant_name}"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("sqrt(n) (theta_hat - theta_0)")
        .y_desc("Probability density")
        .draw()?;

    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.left, 0.0), (b.right, b.density)], BLUE.mix(0.4).filled())
    }))?;
    chart.draw_series(LineSeries::new(pdf_points, &RED))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ranksim_core::NB_VARIANTS;

    #[test]
    fn test_compute_bins_density_integrates_to_one() {
        let values: Vec<f64> = (0..1000).map(|i| i as f64 / 10.0).collect();
        let bins = compute_bins(&values, 50).unwrap();
        assert_eq!(bins.len(), 50);
        let integral: f64 = bins.iter().map(|b| b.density * (b.right - b.left)).sum();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_bins_counts_every_value() {
        // Maximum lands in the last bin instead of overflowing
        let values = vec![0.0, 0.5, 1.0];
        let bins = compute_bins(&values, 2).unwrap();
        let total: f64 = bins
            .iter()
            .map(|b| b.density * (b.right - b.left) * values.len() as f64)
            .sum();
        assert_relative_eq!(total, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_compute_bins_degenerate_inputs() {
        assert!(compute_bins(&[], 50).is_none());
        assert!(compute_bins(&[1.0], 50).is_none());
        assert!(compute_bins(&[2.0, 2.0, 2.0], 50).is_none());
        assert!(compute_bins(&[1.0, 2.0], 0).is_none());
    }

    #[test]
    fn test_save_histograms_skips_collapsed_variants() {
        // Constant estimates give a zero-width distribution for every
        // variant: nothing is rendered and nothing touches the disk.
        let mut est = ResultMatrix::new(NB_VARIANTS);
        let mut se = ResultMatrix::new(NB_VARIANTS);
        for _ in 0..20 {
            est.push_row(&[1.0; NB_VARIANTS]).unwrap();
            se.push_row(&[0.1; NB_VARIANTS]).unwrap();
        }
        let written = save_histograms(
            &est,
            &se,
            1.0,
            500,
            Path::new("/nonexistent/dir/ignored"),
        )
        .unwrap();
        assert!(written.is_empty());
    }
}
