//! Descriptive statistics on in-memory samples.
//!
//! Variance and standard deviation use the population convention (divisor `N`).
//! Percentiles interpolate linearly between the two closest ranks, so for sorted
//! data `s` of length `N` the value at fraction `q` sits at rank `q * (N - 1)`.

use super::{Result, StatsError};
use tracing::debug;

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::empty("mean"));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population variance: `Σ(x - mean)² / N`.
pub fn population_variance(data: &[f64]) -> Result<f64> {
    let mean = mean(data)?;
    let sum_sq_diff: f64 = data.iter().map(|&x| (x - mean).powi(2)).sum();
    Ok(sum_sq_diff / data.len() as f64)
}

/// Population standard deviation.
pub fn population_std(data: &[f64]) -> Result<f64> {
    Ok(population_variance(data)?.sqrt())
}

pub fn min(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::empty("min"));
    }
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::empty("max"));
    }
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Return a sorted copy of `data`, leaving the input untouched.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut values = data.to_vec();
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    values
}

/// Compute the `p`-th percentile (`p` in `[0, 100]`) with linear interpolation.
pub fn percentile(data: &[f64], p: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::empty("percentile"));
    }
    percentile_sorted(&sorted(data), p)
}

/// Percentile on data already sorted in non-decreasing order.
///
/// Callers that need several percentiles of the same sample sort once and call
/// this repeatedly.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(StatsError::empty("percentile"));
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidInput {
            reason: format!("percentile must be in [0, 100], got {}", p),
        });
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }

    let frac = rank - lower as f64;
    Ok(sorted[lower] + frac * (sorted[upper] - sorted[lower]))
}

/// Median (50th percentile).
pub fn median(data: &[f64]) -> Result<f64> {
    percentile(data, 50.0)
}

/// Calculate the mean and population standard deviation of a dataset.
///
/// ```
/// let (mean, std) = scistat::calculate_mean_std(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(mean, 3.0);
/// assert!((std - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn calculate_mean_std(data: &[f64]) -> Result<(f64, f64)> {
    debug!(n = data.len(), "Calculating mean and std");
    let mean = mean(data)?;
    let std = population_std(data)?;
    Ok((mean, std))
}
