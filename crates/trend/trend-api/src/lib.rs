//! Trend Prediction Consumer API
//!
//! Currently re-exports the SPI traits and types:
//!
//! - [`Predictor`]: fit-predict trait
//! - [`TrendPredictor`]: one-step-ahead forecast trait
//! - [`TrendFit`]: fitted line
//! - [`TrendError`]: error type
//! - [`Result`]: result type alias

// Re-export all SPI types
pub use trend_spi::{Predictor, Result, TrendError, TrendFit, TrendPredictor};

/// Minimum series length for a linear trend.
pub const MIN_TREND_POINTS: usize = 2;
