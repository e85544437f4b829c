//! Error types for trend prediction.

mod trend_error;

pub use trend_error::{Result, TrendError};
