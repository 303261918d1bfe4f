//! Outlier masks by interquartile-range fences or z-score.

use crate::stats::descriptive::{mean, percentile_sorted, population_std, sorted};
use crate::stats::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Outlier detection method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutlierMethod {
    /// Flag values outside `[Q1 - t*IQR, Q3 + t*IQR]`.
    #[default]
    Iqr,
    /// Flag values with `|x - mean| / std > t`.
    ZScore,
}

impl OutlierMethod {
    pub const ACCEPTED: &'static [&'static str] = &["iqr", "zscore"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iqr => "iqr",
            Self::ZScore => "zscore",
        }
    }

    /// Conventional threshold: Tukey's 1.5 for IQR fences, 3 sigma for z-scores.
    pub fn default_threshold(&self) -> f64 {
        match self {
            Self::Iqr => 1.5,
            Self::ZScore => 3.0,
        }
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutlierMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "iqr" => Ok(Self::Iqr),
            "zscore" => Ok(Self::ZScore),
            other => Err(StatsError::UnknownMethod {
                method: other.to_string(),
                accepted: Self::ACCEPTED,
            }),
        }
    }
}

impl TryFrom<String> for OutlierMethod {
    type Error = StatsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<OutlierMethod> for String {
    fn from(method: OutlierMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Compute an outlier mask for `data`, one flag per value in input order.
pub fn outlier_mask(data: &[f64], method: OutlierMethod, threshold: f64) -> Result<Vec<bool>> {
    if data.is_empty() {
        return Err(StatsError::empty("outlier detection"));
    }
    match method {
        OutlierMethod::Iqr => iqr_mask(data, threshold),
        OutlierMethod::ZScore => zscore_mask(data, threshold),
    }
}

fn iqr_mask(data: &[f64], threshold: f64) -> Result<Vec<bool>> {
    let sorted = sorted(data);
    let q1 = percentile_sorted(&sorted, 25.0)?;
    let q3 = percentile_sorted(&sorted, 75.0)?;
    let iqr = q3 - q1;
    let lower = q1 - threshold * iqr;
    let upper = q3 + threshold * iqr;
    debug!(q1, q3, lower, upper, "IQR fences");

    Ok(data.iter().map(|&x| x < lower || x > upper).collect())
}

fn zscore_mask(data: &[f64], threshold: f64) -> Result<Vec<bool>> {
    let mean = mean(data)?;
    let std = population_std(data)?;
    if std == 0.0 {
        debug!("Zero standard deviation, no z-score outliers");
        return Ok(vec![false; data.len()]);
    }

    Ok(data
        .iter()
        .map(|&x| ((x - mean) / std).abs() > threshold)
        .collect())
}
