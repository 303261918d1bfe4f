//! The seven-statistic summary record.

use serde::Serialize;

/// Statistical summary of a dataset.
///
/// Serializes as a JSON object keyed by the statistic names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std: f64,
    pub min: f64,
    pub max: f64,
    /// 25th percentile.
    pub q25: f64,
    /// 75th percentile.
    pub q75: f64,
}

impl Summary {
    /// Statistic names, in reporting order.
    pub const KEYS: [&'static str; 7] = ["mean", "median", "std", "min", "max", "q25", "q75"];

    /// Look up a statistic by name.
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "mean" => Some(self.mean),
            "median" => Some(self.median),
            "std" => Some(self.std),
            "min" => Some(self.min),
            "max" => Some(self.max),
            "q25" => Some(self.q25),
            "q75" => Some(self.q75),
            _ => None,
        }
    }

    /// `(name, value)` pairs in [`Summary::KEYS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Self::KEYS
            .iter()
            .filter_map(move |&key| self.get(key).map(|value| (key, value)))
    }

    /// Interquartile range, `q75 - q25`.
    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }
}
