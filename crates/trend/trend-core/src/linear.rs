//! Linear trend for consumption forecasting
//!
//! Fits `value = intercept + slope * index` by ordinary least squares, where
//! `index` is the zero-based position of each observation in the series.
//! Uneven gaps between billing periods are not modeled: bills are treated as
//! evenly spaced.
//!
//! Forecasts are clamped to zero because consumption cannot be negative.

use serde::{Deserialize, Serialize};
use trend_api::MIN_TREND_POINTS;
use trend_spi::{Predictor, Result, TrendError, TrendFit, TrendPredictor};

/// Linear trend model over sequence position
///
/// # Example
///
/// ```rust
/// use trend_core::{LinearTrend, Predictor};
///
/// let mut model = LinearTrend::new();
/// model.fit(&[10.0, 20.0]).unwrap();
///
/// assert_eq!(model.predict(1).unwrap(), vec![30.0]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearTrend {
    fit: Option<TrendFit>,
}

impl LinearTrend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slope(&self) -> Option<f64> {
        self.fit.map(|f| f.slope)
    }

    pub fn intercept(&self) -> Option<f64> {
        self.fit.map(|f| f.intercept)
    }

    pub fn r_squared(&self) -> Option<f64> {
        self.fit.map(|f| f.r_squared)
    }

    /// Unclamped line value at a sequence position
    pub fn predict_at(&self, index: f64) -> Result<f64> {
        self.fit
            .map(|f| f.value_at(index))
            .ok_or(TrendError::NotFitted)
    }

    /// Differences between the observations and the fitted line
    pub fn residuals(&self, data: &[f64]) -> Vec<f64> {
        match self.fit {
            Some(fit) => data
                .iter()
                .enumerate()
                .map(|(i, &y)| y - fit.value_at(i as f64))
                .collect(),
            None => Vec::new(),
        }
    }
}

fn least_squares(data: &[f64]) -> Result<TrendFit> {
    if data.len() < MIN_TREND_POINTS {
        return Err(TrendError::InsufficientData {
            required: MIN_TREND_POINTS,
            actual: data.len(),
        });
    }
    if data.iter().any(|y| !y.is_finite()) {
        return Err(TrendError::InvalidData(
            "series contains NaN or infinite values".to_string(),
        ));
    }

    let n = data.len() as f64;

    // Time indices: 0, 1, 2, ...
    let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
    let sum_y: f64 = data.iter().sum();
    let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    // Indices are distinct, so the denominator is positive for n >= 2.
    let denominator = n * sum_t2 - sum_t * sum_t;
    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;

    let mean_y = sum_y / n;
    let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = data
        .iter()
        .enumerate()
        .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
        .sum();

    let r_squared = if ss_tot > 1e-10 {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    };

    Ok(TrendFit {
        intercept,
        slope,
        r_squared,
        n_observations: data.len(),
    })
}

impl Predictor for LinearTrend {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.fit = Some(least_squares(data)?);
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        let fit = self.fit.ok_or(TrendError::NotFitted)?;
        Ok((0..steps)
            .map(|i| fit.value_at((fit.n_observations + i) as f64).max(0.0))
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }
}

/// Stateless [`TrendPredictor`] backed by [`LinearTrend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NextPeriodForecaster;

impl TrendPredictor for NextPeriodForecaster {
    fn predict_next(&self, series: &[f64]) -> Option<f64> {
        predict_next(series)
    }
}

/// Forecast the period after the last observation.
///
/// Returns `None` when the series has fewer than two points or holds
/// non-finite values. The forecast is never negative.
pub fn predict_next(series: &[f64]) -> Option<f64> {
    least_squares(series)
        .ok()
        .map(|fit| fit.next_value().max(0.0))
}
