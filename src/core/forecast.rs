//! Forecast result holding the smoothing state and the extended forecast.

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;

/// Output of a single forecasting run.
///
/// The level and interval series cover the observed span only; the forecast
/// series covers the observed span followed by the flat extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    method: String,
    dates: Vec<NaiveDate>,
    level: Vec<f64>,
    interval: Option<Vec<f64>>,
    values: Vec<f64>,
    observed: usize,
}

impl Forecast {
    /// Assemble a forecast from the recursion output.
    ///
    /// `dates` must hold one entry per forecast value, and `level` (and
    /// `interval`, when present) one entry per observed period.
    pub fn new(
        method: impl Into<String>,
        dates: Vec<NaiveDate>,
        level: Vec<f64>,
        interval: Option<Vec<f64>>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let observed = level.len();
        if observed == 0 {
            return Err(ForecastError::EmptyData);
        }
        if let Some(interval) = &interval {
            if interval.len() != observed {
                return Err(ForecastError::DimensionMismatch {
                    expected: observed,
                    got: interval.len(),
                });
            }
        }
        if values.len() < observed {
            return Err(ForecastError::InsufficientData {
                needed: observed,
                got: values.len(),
            });
        }
        if dates.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: values.len(),
                got: dates.len(),
            });
        }

        Ok(Self {
            method: method.into(),
            dates,
            level,
            interval,
            values,
            observed,
        })
    }

    /// Display name of the method that produced this forecast.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Smoothed demand-size level per observed period.
    pub fn level(&self) -> &[f64] {
        &self.level
    }

    /// Interval or probability estimate per observed period (absent for SES).
    pub fn interval(&self) -> Option<&[f64]> {
        self.interval.as_deref()
    }

    /// Full forecast series: observed span followed by the extension.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// In-sample forecasts, aligned with the observed series.
    pub fn fitted(&self) -> &[f64] {
        &self.values[..self.observed]
    }

    /// Forecasts appended past the last observation.
    pub fn extension(&self) -> &[f64] {
        &self.values[self.observed..]
    }

    /// Last in-sample forecast, the value carried into the extension.
    pub fn last_fitted(&self) -> f64 {
        self.values[self.observed - 1]
    }

    /// Number of observed periods.
    pub fn observed_len(&self) -> usize {
        self.observed
    }

    /// Total number of forecast values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dates of every forecast value.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Dates of the extension only.
    pub fn future_dates(&self) -> &[NaiveDate] {
        &self.dates[self.observed..]
    }

    /// Iterate over `(date, forecast)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: usize) -> Vec<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .iter_days()
            .take(n)
            .collect()
    }

    #[test]
    fn forecast_splits_fitted_and_extension() {
        let forecast = Forecast::new(
            "Croston",
            dates(5),
            vec![1.0, 1.0, 2.0],
            Some(vec![1.0, 1.0, 1.0]),
            vec![1.0, 1.0, 2.0, 2.0, 2.0],
        )
        .unwrap();

        assert_eq!(forecast.method(), "Croston");
        assert_eq!(forecast.observed_len(), 3);
        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast.fitted(), &[1.0, 1.0, 2.0]);
        assert_eq!(forecast.extension(), &[2.0, 2.0]);
        assert_eq!(forecast.last_fitted(), 2.0);
        assert_eq!(forecast.future_dates(), &dates(5)[3..]);
        assert_eq!(forecast.iter().count(), 5);
    }

    #[test]
    fn forecast_rejects_misaligned_parts() {
        let result = Forecast::new(
            "SES",
            dates(3),
            vec![1.0, 2.0],
            Some(vec![1.0]),
            vec![1.0, 2.0, 2.0],
        );
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch { expected: 2, got: 1 })
        ));

        let result = Forecast::new(
            "SES",
            dates(2),
            vec![1.0, 2.0],
            None,
            vec![1.0, 2.0, 2.0],
        );
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch { expected: 3, got: 2 })
        ));

        let result = Forecast::new("SES", dates(1), vec![1.0, 2.0], None, vec![1.0]);
        assert!(matches!(result, Err(ForecastError::InsufficientData { .. })));

        let result = Forecast::new("SES", vec![], vec![], None, vec![]);
        assert!(matches!(result, Err(ForecastError::EmptyData)));
    }
}
