//! Trend prediction error types

use thiserror::Error;

/// Errors that can occur while fitting a trend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Series contains NaN or infinite values
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Model has not been fitted
    #[error("Model must be fitted before prediction")]
    NotFitted,
}

/// Result type for trend operations
pub type Result<T> = std::result::Result<T, TrendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_error_message() {
        let error = TrendError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_invalid_data_error_message() {
        let error = TrendError::InvalidData("series contains NaN".to_string());
        assert_eq!(error.to_string(), "Invalid data: series contains NaN");
    }

    #[test]
    fn test_not_fitted_error_message() {
        assert_eq!(
            TrendError::NotFitted.to_string(),
            "Model must be fitted before prediction"
        );
    }
}
