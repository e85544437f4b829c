//! Trend Prediction Facade
//!
//! High-level API for consumption forecasting. Re-exports all public types
//! from the trend stack.
//!
//! # Example
//!
//! ```rust
//! use trend_facade::predict_next;
//!
//! let electricity = [1200.0, 1300.0, 1400.0];
//! assert_eq!(predict_next(&electricity), Some(1500.0));
//! assert_eq!(predict_next(&electricity[..1]), None);
//! ```

// Re-export everything from core (includes implementations)
pub use trend_core::*;

// Re-export from API for completeness
#[allow(unused_imports)]
pub use trend_api::*;
