//! Serializable description of a forecasting run.

use super::method::Method;
use super::params::{validate_alpha, validate_beta, DEFAULT_ALPHA, DEFAULT_BETA};
use crate::core::{DemandSeries, Forecast, Frequency, Horizon};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Method, smoothing constants and horizon for one forecast.
///
/// Missing fields take their defaults: Croston, alpha = beta = 0.1, no
/// extension, daily frequency.
///
/// # Example
///
/// ```
/// use anofox_intermittent::models::{ForecastConfig, Method};
///
/// let config: ForecastConfig =
///     serde_json::from_str(r#"{ "method": "tsb", "alpha": 0.5, "beta": 0.2, "n_steps": 4 }"#)
///         .unwrap();
/// assert_eq!(config.method, Method::Tsb);
/// assert_eq!(config.horizon().extension_len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub method: Method,
    pub alpha: f64,
    pub beta: f64,
    pub n_steps: usize,
    pub frequency: Frequency,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            n_steps: 1,
            frequency: Frequency::daily(),
        }
    }
}

impl ForecastConfig {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_horizon(mut self, n_steps: usize, frequency: Frequency) -> Self {
        self.n_steps = n_steps;
        self.frequency = frequency;
        self
    }

    pub fn horizon(&self) -> Horizon {
        Horizon::new(self.n_steps, self.frequency)
    }

    /// Check the smoothing constants. Beta is only checked for TSB.
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.alpha)?;
        if self.method.uses_beta() {
            validate_beta(self.beta)?;
        }
        Ok(())
    }

    /// Validate and run the configured method on `series`.
    pub fn run(&self, series: &DemandSeries) -> Result<Forecast> {
        self.validate()?;
        self.method
            .build(self.alpha, self.beta)
            .forecast(series, &self.horizon())
    }
}
