//! Rescaling of datasets by z-score or min-max.

use super::descriptive::{max, mean, min, population_std};
use super::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Normalization method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NormalizeMethod {
    /// `(x - mean) / std`, zero mean and unit variance.
    #[default]
    ZScore,
    /// `(x - min) / (max - min)`, scaled to `[0, 1]`.
    MinMax,
}

impl NormalizeMethod {
    pub const ACCEPTED: &'static [&'static str] = &["zscore", "minmax"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZScore => "zscore",
            Self::MinMax => "minmax",
        }
    }
}

impl fmt::Display for NormalizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizeMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zscore" => Ok(Self::ZScore),
            "minmax" => Ok(Self::MinMax),
            other => Err(StatsError::UnknownMethod {
                method: other.to_string(),
                accepted: Self::ACCEPTED,
            }),
        }
    }
}

impl TryFrom<String> for NormalizeMethod {
    type Error = StatsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<NormalizeMethod> for String {
    fn from(method: NormalizeMethod) -> Self {
        method.as_str().to_string()
    }
}

/// Normalize `data` with `method`, returning a new vector of the same length.
///
/// A dataset with no spread (zero std for z-score, `max == min` for min-max)
/// normalizes to all zeros.
pub fn normalize_data(data: &[f64], method: NormalizeMethod) -> Result<Vec<f64>> {
    debug!(n = data.len(), %method, "Normalizing dataset");

    match method {
        NormalizeMethod::ZScore => {
            let mean = mean(data)?;
            let std = population_std(data)?;
            if std == 0.0 {
                debug!("Zero standard deviation, returning zeros");
                return Ok(vec![0.0; data.len()]);
            }
            Ok(data.iter().map(|&x| (x - mean) / std).collect())
        }
        NormalizeMethod::MinMax => {
            let lo = min(data)?;
            let hi = max(data)?;
            if hi == lo {
                debug!("Constant dataset, returning zeros");
                return Ok(vec![0.0; data.len()]);
            }
            let range = hi - lo;
            Ok(data.iter().map(|&x| (x - lo) / range).collect())
        }
    }
}
