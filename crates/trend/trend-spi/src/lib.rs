//! Trend Prediction Service Provider Interface
//!
//! Defines the traits and error types for forecasting the next period of a
//! consumption series:
//!
//! - [`Predictor`]: fit-predict interface for trend models
//! - [`TrendPredictor`]: stateless one-step-ahead forecast over a series
//! - [`TrendFit`]: fitted line parameters
//! - [`TrendError`]: error type for fitting

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Predictor, TrendPredictor};
pub use error::{Result, TrendError};
pub use model::TrendFit;
