//! Simple linear regression by ordinary least squares.
//!
//! Fits `y = slope * x + intercept` with
//!
//! ```text
//! slope     = Cov(x, y) / Var(x)
//! intercept = ȳ - slope * x̄
//! R²        = 1 - SS_res / SS_tot
//! ```
//!
//! Covariance and variance share the population divisor `N`, so it cancels in
//! the slope. When every `y` is identical (`SS_tot == 0`) R² is reported as 0.

use super::descriptive::{mean, population_std};
use super::{Result, StatsError};
use serde::Serialize;
use tracing::debug;

/// Result of a simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// `(slope, intercept, r_squared)`
    pub fn into_tuple(self) -> (f64, f64, f64) {
        (self.slope, self.intercept, self.r_squared)
    }
}

/// Perform simple linear regression of `y` on `x`.
///
/// # Errors
///
/// * [`StatsError::LengthMismatch`] if `x` and `y` differ in length.
/// * [`StatsError::InvalidInput`] if both are empty.
/// * [`StatsError::ZeroVariance`] if `x` is constant.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::empty("linear regression"));
    }
    debug!(n = x.len(), "Fitting linear regression");

    if population_std(x)? == 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let n = x.len() as f64;
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let (mut ss_xy, mut ss_xx) = (0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        ss_xy += dx * (yi - mean_y);
        ss_xx += dx * dx;
    }
    let covariance = ss_xy / n;
    let variance = ss_xx / n;

    let slope = covariance / variance;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let residual = yi - (slope * xi + intercept);
        ss_res += residual * residual;
        ss_tot += (yi - mean_y).powi(2);
    }

    let r_squared = if ss_tot != 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        debug!("Dependent variable is constant, reporting R² = 0");
        0.0
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}
