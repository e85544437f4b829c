//! Data models for consumption scoring.

mod bill;
mod metric;
mod school;
mod scores;

pub use bill::Bill;
pub use metric::Metric;
pub use school::SchoolProfile;
pub use scores::EfficiencyScores;
