//! Trend Prediction Core
//!
//! Ordinary least-squares trend over a consumption series, and the
//! one-step-ahead forecast built on it.

pub mod linear;

// Re-export from SPI
pub use trend_spi::{Predictor, Result, TrendError, TrendFit, TrendPredictor};

pub use linear::{predict_next, LinearTrend, NextPeriodForecaster};
