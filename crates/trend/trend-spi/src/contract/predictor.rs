//! Predictor traits for consumption series
//!
//! A series is the values of one metric taken from a school's history in
//! period order. Predictors regress against the position in that sequence,
//! not against calendar time.

use crate::error::Result;

/// Fit-predict interface for trend models
///
/// # Example
///
/// ```rust,ignore
/// use trend_spi::Predictor;
///
/// fn forecast<P: Predictor>(model: &mut P, series: &[f64], horizon: usize) -> trend_spi::Result<Vec<f64>> {
///     model.fit(series)?;
///     model.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to a series ordered by period
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Forecast the next `steps` periods
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

/// Stateless one-step-ahead forecaster
///
/// Insufficient history is an expected outcome, reported as `None` rather
/// than an error. Callers run it once per metric.
pub trait TrendPredictor: Send + Sync {
    /// Forecast the period following the last observation.
    fn predict_next(&self, series: &[f64]) -> Option<f64>;
}
