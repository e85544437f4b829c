//! Data models for trend prediction.

mod trend_fit;

pub use trend_fit::TrendFit;
