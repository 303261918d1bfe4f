//! scistat -- elementary statistics for exploratory scientific data analysis.
//!
//! This crate provides mean and standard deviation, simple linear regression,
//! normalization, summary statistics, and outlier detection over 1-D datasets
//! held in memory. Every routine is a pure computation over a slice.
//!
//! ```
//! use scistat::{linear_regression, normalize_data, NormalizeMethod};
//!
//! let fit = linear_regression(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]).unwrap();
//! assert!((fit.slope - 0.6).abs() < 1e-10);
//!
//! let scaled = normalize_data(&[2.0, 4.0, 6.0], NormalizeMethod::MinMax).unwrap();
//! assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
//! ```

pub mod analysis;
pub mod config;
pub mod input;
pub mod stats;

pub use analysis::{DataAnalyzer, OutlierMethod, Summary};
pub use config::AnalysisConfig;
pub use stats::{
    calculate_mean_std, linear_regression, normalize_data, LinearFit, NormalizeMethod,
    StatsError,
};
