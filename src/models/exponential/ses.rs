//! Simple Exponential Smoothing (SES) baseline.
//!
//! SES ignores the intermittent structure and smooths the raw series,
//! zeros included. It serves as the reference the intermittent methods are
//! compared against.

use crate::core::{DemandSeries, Forecast, Horizon};
use crate::error::Result;
use crate::models::intermittent::recursion::extend;
use crate::models::params::{validate_alpha, DEFAULT_ALPHA};
use crate::models::Forecaster;

/// Simple Exponential Smoothing forecaster.
///
/// The model equation is:
/// `F_{t+1} = α × x_t + (1-α) × F_t`, with `F_0 = x_0`.
///
/// # Example
/// ```
/// use anofox_intermittent::core::{DemandSeries, Horizon};
/// use anofox_intermittent::models::exponential::SimpleExponentialSmoothing;
/// use anofox_intermittent::models::Forecaster;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 8, 21).unwrap();
/// let ts = DemandSeries::new(start, vec![5.0, 10.0, 0.0]).unwrap();
///
/// let forecast = SimpleExponentialSmoothing::new(0.5)
///     .forecast(&ts, &Horizon::steps(3))
///     .unwrap();
/// assert_eq!(forecast.values(), &[5.0, 5.0, 7.5, 7.5, 7.5]);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Smoothing parameter, in (0, 1].
    alpha: f64,
}

impl SimpleExponentialSmoothing {
    /// Create SES with the given alpha. Checked when forecasting.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn smooth(values: &[f64], alpha: f64) -> Vec<f64> {
        let mut fitted = Vec::with_capacity(values.len());
        let mut level = values[0];
        fitted.push(level);
        for &x in &values[..values.len() - 1] {
            level = alpha * x + (1.0 - alpha) * level;
            fitted.push(level);
        }
        fitted
    }
}

impl Default for SimpleExponentialSmoothing {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHA)
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn forecast(&self, series: &DemandSeries, horizon: &Horizon) -> Result<Forecast> {
        let alpha = validate_alpha(self.alpha)?;
        let fitted = Self::smooth(series.values(), alpha);

        tracing::debug!(
            method = self.name(),
            alpha,
            periods = series.len(),
            extension = horizon.extension_len(),
            "ran exponential smoothing"
        );

        // The SES level is its own forecast; there is no interval state.
        extend(self.name(), series, horizon, fitted.clone(), None, fitted)
    }

    fn name(&self) -> &str {
        "SES"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn canonical_series() -> DemandSeries {
        let values = vec![
            5.0, 10.0, 0.0, 0.0, 0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 6.0, 0.0,
        ];
        DemandSeries::new(NaiveDate::from_ymd_opt(2020, 8, 21).unwrap(), values).unwrap()
    }

    #[test]
    fn ses_canonical_trajectory() {
        let forecast = SimpleExponentialSmoothing::new(0.5)
            .forecast(&canonical_series(), &Horizon::steps(4))
            .unwrap();

        assert_eq!(
            forecast.fitted(),
            &[
                5.0, 5.0, 7.5, 3.75, 1.875, 0.9375, 0.46875, 3.734375, 1.8671875, 0.93359375,
                0.466796875, 3.2333984375
            ]
        );
        assert_eq!(forecast.extension(), &[3.2333984375; 3]);
        assert!(forecast.interval().is_none());
        assert_eq!(forecast.level(), forecast.fitted());
    }

    #[test]
    fn ses_alpha_one_is_naive() {
        let forecast = SimpleExponentialSmoothing::new(1.0)
            .forecast(&canonical_series(), &Horizon::steps(1))
            .unwrap();

        let values = canonical_series().values().to_vec();
        assert_eq!(forecast.values()[0], values[0]);
        for t in 1..values.len() {
            assert_relative_eq!(forecast.values()[t], values[t - 1], epsilon = 1e-12);
        }
    }

    #[test]
    fn ses_rejects_invalid_alpha() {
        let result = SimpleExponentialSmoothing::new(0.0)
            .forecast(&canonical_series(), &Horizon::default());
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }

    #[test]
    fn ses_default() {
        let model = SimpleExponentialSmoothing::default();
        assert_relative_eq!(model.alpha(), 0.1, epsilon = 1e-10);
        assert_eq!(model.name(), "SES");
    }
}
