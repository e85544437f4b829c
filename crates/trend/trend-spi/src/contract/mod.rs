//! Contract definitions for trend prediction.

mod predictor;

pub use predictor::{Predictor, TrendPredictor};
