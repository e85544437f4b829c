//! # analysis
//!
//! Runs the consumption engine the way the analysis endpoints use it:
//!
//! 1. score a submitted bill against its school,
//! 2. append it to the school's history,
//! 3. forecast the next period for each metric,
//! 4. flag unusual readings.
//!
//! Every operation is a pure function of its arguments. Storing the new
//! efficiency score and the bill is the caller's job.

mod alert;
mod analyzer;
mod config;
mod error;
mod report;

pub use alert::UsageAlert;
pub use analyzer::{forecast_with_fallback, BillAnalyzer};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, Result};
pub use report::{MetricPredictions, SubmissionReport, TrendInsights, TrendPoint};

// Domain types callers need alongside the analyzer
pub use efficiency_facade::{Bill, EfficiencyScores, Metric, SchoolProfile, ScoringConfig};
pub use anomaly_facade::{PolicyConfig, PolicyKind, RatioConfig, ZScoreConfig};
