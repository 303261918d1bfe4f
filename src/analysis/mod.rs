//! Dataset summaries and outlier detection.

pub mod outliers;
pub mod summary;

use crate::stats::descriptive::{self, percentile_sorted, sorted};
use crate::stats::{Result, StatsError};
use tracing::debug;

pub use outliers::OutlierMethod;
pub use summary::Summary;

/// Default dataset name.
pub const DEFAULT_NAME: &str = "dataset";

/// A named, read-only dataset with summary and outlier queries.
///
/// ```
/// use scistat::{DataAnalyzer, OutlierMethod};
///
/// let analyzer = DataAnalyzer::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
/// let outliers = analyzer.outlier_values(OutlierMethod::Iqr, 1.5).unwrap();
/// assert_eq!(outliers, vec![100.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataAnalyzer {
    data: Vec<f64>,
    name: String,
    n_samples: usize,
}

impl DataAnalyzer {
    /// Wrap `data` under the default name.
    pub fn new(data: Vec<f64>) -> Result<Self> {
        Self::with_name(data, DEFAULT_NAME)
    }

    /// Wrap `data` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidInput`] if `data` is empty.
    pub fn with_name(data: Vec<f64>, name: impl Into<String>) -> Result<Self> {
        if data.is_empty() {
            return Err(StatsError::empty("DataAnalyzer"));
        }
        let name = name.into();
        let n_samples = data.len();
        debug!(%name, n_samples, "Created analyzer");
        Ok(Self {
            data,
            name,
            n_samples,
        })
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Compute the seven-statistic summary. Nothing is cached between calls.
    pub fn get_summary(&self) -> Result<Summary> {
        debug!(name = %self.name, "Computing summary");
        let sorted = sorted(&self.data);
        let (mean, std) = descriptive::calculate_mean_std(&self.data)?;

        Ok(Summary {
            mean,
            median: percentile_sorted(&sorted, 50.0)?,
            std,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            q25: percentile_sorted(&sorted, 25.0)?,
            q75: percentile_sorted(&sorted, 75.0)?,
        })
    }

    /// Flag outliers with `method` at `threshold`.
    ///
    /// The threshold is used as given; see [`OutlierMethod::default_threshold`]
    /// for the conventional value of each method.
    pub fn detect_outliers(&self, method: OutlierMethod, threshold: f64) -> Result<Vec<bool>> {
        debug!(name = %self.name, %method, threshold, "Detecting outliers");
        outliers::outlier_mask(&self.data, method, threshold)
    }

    /// Values flagged by [`DataAnalyzer::detect_outliers`], in dataset order.
    pub fn outlier_values(&self, method: OutlierMethod, threshold: f64) -> Result<Vec<f64>> {
        let mask = self.detect_outliers(method, threshold)?;
        Ok(self
            .data
            .iter()
            .zip(mask)
            .filter_map(|(&value, flagged)| flagged.then_some(value))
            .collect())
    }
}
