//! Accuracy metrics for forecast evaluation.
//!
//! Both metrics compare a realized series with the in-sample part of a
//! forecast: forecast entries beyond the realized length are ignored.

use crate::core::{DemandSeries, Forecast};
use crate::error::{ForecastError, Result};
use std::fmt;

/// Accuracy metrics for evaluating forecast performance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Scaled Error (None if the realized series is constant)
    pub mase: Option<f64>,
    /// Root Mean Squared Error
    pub rmse: f64,
}

impl fmt::Display for AccuracyMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mase {
            Some(mase) => write!(f, "MASE = {:.3}, RMSE = {:.3}", mase, self.rmse),
            None => write!(f, "MASE = undefined, RMSE = {:.3}", self.rmse),
        }
    }
}

/// Compute MASE and RMSE of `forecast` against `series`.
pub fn evaluate(series: &DemandSeries, forecast: &Forecast) -> Result<AccuracyMetrics> {
    let actual = series.values();
    let predicted = forecast.values();

    let mase = match mase(actual, predicted) {
        Ok(value) => Some(value),
        Err(ForecastError::UndefinedMase) => None,
        Err(e) => return Err(e),
    };
    let rmse = rmse(actual, predicted)?;

    Ok(AccuracyMetrics { mase, rmse })
}

/// In-sample slice of `predicted` aligned with `actual`.
fn aligned<'a>(actual: &'a [f64], predicted: &'a [f64]) -> Result<&'a [f64]> {
    if actual.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if predicted.len() < actual.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    Ok(&predicted[..actual.len()])
}

/// Mean Absolute Scaled Error.
///
/// Absolute errors are scaled by the mean absolute first difference of the
/// realized series. A single observation or a constant series has no scale
/// and yields [`ForecastError::UndefinedMase`].
pub fn mase(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let predicted = aligned(actual, predicted)?;
    let n = actual.len();

    if n < 2 {
        return Err(ForecastError::UndefinedMase);
    }

    let scale: f64 = actual
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .sum::<f64>()
        / (n - 1) as f64;

    if scale == 0.0 {
        return Err(ForecastError::UndefinedMase);
    }

    let scaled_error: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs() / scale)
        .sum();

    Ok(scaled_error / n as f64)
}

/// Root Mean Squared Error.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let predicted = aligned(actual, predicted)?;
    let mse = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64;
    Ok(mse.sqrt())
}
