//! Text rendering of reports
//!
//! Pure formatting: both functions return the block as a `String` and leave
//! console/file emission to the caller, so side effects can never feed back
//! into the numbers.

use ranksim_core::{RegimeDiagnostics, VARIANTS};

use crate::report::{PerformanceReport, VariantMetrics};

const METRIC_LABELS: [(&str, fn(&VariantMetrics) -> f64); 6] = [
    ("bias", |m| m.bias),
    ("MAE", |m| m.mae),
    ("RMSE", |m| m.rmse),
    ("Coverage rate", |m| m.coverage),
    ("CI size", |m| m.ci_size),
    ("Quantile .95", |m| m.quantile95),
];

/// Render the startup parameter echo with the regime diagnostics.
pub fn render_parameter_echo(
    lambda_x: f64,
    lambda_z: f64,
    alpha_y: f64,
    diag: &RegimeDiagnostics,
) -> String {
    let mut out = format!(
        "lambda_x={lambda_x:.2} -- lambda_z={lambda_z:.2} -- alpha_y={alpha_y:.2}\n"
    );
    out.push_str(&format!("Parameter values give b_2={:.2}\n", diag.b2));
    out.push_str(&format!("Parameter values give d_2={:.2}\n", diag.d2));
    out.push_str(&format!("So b_2+d_2={:.2}\n", diag.sum()));
    out.push_str("--- Remember, b_2 + d_2 should be below .5 for asymptotic normality,\n");
    out.push_str("--- and below 1 for theta_0 to be finite.\n");
    out
}

/// Render one performance report as the per-sample-size text block.
pub fn render_report(report: &PerformanceReport) -> String {
    let mut out = format!("Theta_0: {:.2}\n", report.theta0);
    out.push_str(&format!("Number of simulations: {}\n", report.n_simu));
    out.push_str(&format!("Sample size: {}\n\n", report.n_obs));

    match &report.metrics {
        Some(metrics) => {
            for (label, pick) in METRIC_LABELS {
                out.push_str(&format!("{label}:\n"));
                for (variant, m) in VARIANTS.iter().zip(metrics.iter()) {
                    out.push_str(&format!("- {}: {:.4}\n", variant.name, pick(m)));
                }
                out.push('\n');
            }
        }
        None => {
            out.push_str("No valid replications: all draws were degenerate.\n");
        }
    }
    out
}
