//! Analytical ground truth and validity diagnostics
//!
//! For the Pareto/Exponential/Exponential design the target functional has a
//! closed form, so simulated estimates can be scored against an exact value
//! instead of a long-run simulated one.

use tracing::warn;

/// Closed-form value of the target functional.
///
/// `theta0 = 1 / (alpha_y * lambda_x / lambda_z - 1)`.
///
/// The value is only finite when `alpha_y * lambda_x / lambda_z > 1`; outside
/// that regime the function returns NaN as a sentinel rather than erroring,
/// since a parameter set outside the validity boundary is a configuration
/// warning, not a programming fault.
pub fn analytical_theta(alpha_y: f64, lambda_z: f64, lambda_x: f64) -> f64 {
    let denom = alpha_y * lambda_x / lambda_z - 1.0;
    if denom <= 0.0 {
        return f64::NAN;
    }
    1.0 / denom
}

/// Derived quantities that locate the configured parameters relative to the
/// validity boundaries of the asymptotic theory.
///
/// `b2 + d2` must stay below 1 for `theta0` to be finite, and below 0.5 for
/// the asymptotic-normality result to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeDiagnostics {
    /// `1 - lambda_x / lambda_z`
    pub b2: f64,
    /// `1 / alpha_y`
    pub d2: f64,
}

impl RegimeDiagnostics {
    /// Compute the diagnostics from the three distribution parameters
    pub fn new(alpha_y: f64, lambda_z: f64, lambda_x: f64) -> Self {
        Self {
            b2: 1.0 - lambda_x / lambda_z,
            d2: 1.0 / alpha_y,
        }
    }

    /// `b2 + d2`
    pub fn sum(&self) -> f64 {
        self.b2 + self.d2
    }

    /// True when `theta0` is finite (`b2 + d2 < 1`)
    pub fn theta_is_finite(&self) -> bool {
        self.sum() < 1.0
    }

    /// True when the asymptotic-normality guarantee applies (`b2 + d2 < 0.5`)
    pub fn asymptotics_apply(&self) -> bool {
        self.sum() < 0.5
    }

    /// Emit a one-time warning when the parameters sit outside the regime
    /// where the theory backs the simulation design. Informational only.
    pub fn warn_if_outside_regime(&self) {
        if !self.theta_is_finite() {
            warn!(
                b2 = self.b2,
                d2 = self.d2,
                sum = self.sum(),
                "b2 + d2 >= 1: theta_0 is not finite for these parameters"
            );
        } else if !self.asymptotics_apply() {
            warn!(
                b2 = self.b2,
                d2 = self.d2,
                sum = self.sum(),
                "b2 + d2 >= 0.5: asymptotic normality is not guaranteed"
            );
        }
    }
}
