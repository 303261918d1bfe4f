//! Statistical primitives, regression, and normalization over 1-D datasets.

pub mod descriptive;
pub mod normalize;
pub mod regression;

use thiserror::Error;

pub use descriptive::calculate_mean_std;
pub use normalize::{normalize_data, NormalizeMethod};
pub use regression::{linear_regression, LinearFit};

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("independent variable has zero variance")]
    ZeroVariance,

    #[error("unknown method '{method}', expected one of: {}", .accepted.join(", "))]
    UnknownMethod {
        method: String,
        accepted: &'static [&'static str],
    },
}

impl StatsError {
    pub(crate) fn empty(context: &str) -> Self {
        Self::InvalidInput {
            reason: format!("{} requires a non-empty dataset", context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::UnknownMethod {
            method: "bogus".to_string(),
            accepted: &["zscore", "minmax"],
        };
        let msg = err.to_string();
        assert!(msg.contains("'bogus'"));
        assert!(msg.contains("zscore, minmax"));

        let err = StatsError::LengthMismatch { x_len: 3, y_len: 4 };
        assert!(err.to_string().contains("3"));
        assert!(err.to_string().contains("4"));

        assert!(StatsError::empty("mean").to_string().contains("mean"));
    }
}
