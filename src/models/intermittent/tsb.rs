//! TSB (Teunter-Syntetos-Babai) method for intermittent demand forecasting.
//!
//! TSB replaces Croston's interval with a demand probability `P` that is
//! updated every period, so the forecast decays through long runs of zeros:
//! - demand: `P' = β + (1 − β)·P`
//! - no demand: `P' = (1 − β)·P`
//! - forecast: `F = L · P`
//!
//! The demand-size level `L` is smoothed with `α` on demand periods only.
//!
//! Reference: Teunter, R. H., Syntetos, A. A., & Babai, M. Z. (2011).
//! "Intermittent demand: Linking forecasting to inventory obsolescence."

use super::recursion::{forecast_series, IntervalRule};
use crate::core::{DemandSeries, Forecast, Horizon};
use crate::error::Result;
use crate::models::params::{validate_alpha, validate_beta, DEFAULT_ALPHA, DEFAULT_BETA};
use crate::models::Forecaster;

/// TSB method for intermittent demand forecasting.
#[derive(Debug, Clone)]
pub struct TSB {
    /// Smoothing parameter for demand size, in (0, 1].
    alpha: f64,
    /// Smoothing parameter for probability, in [0, 1).
    beta: f64,
}

impl TSB {
    /// Create a new TSB model with alpha = beta = 0.1.
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
        }
    }

    /// Create TSB model with specified parameters. Checked when forecasting.
    pub fn with_params(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Get the demand smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the probability smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Default for TSB {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalRule for TSB {
    fn on_demand(&self, probability: f64, _q: f64, _alpha: f64) -> f64 {
        self.beta + (1.0 - self.beta) * probability
    }

    fn on_idle(&self, probability: f64) -> f64 {
        (1.0 - self.beta) * probability
    }

    fn estimate(&self, level: f64, probability: f64, _alpha: f64) -> f64 {
        level * probability
    }

    fn is_degenerate(&self, _probability: f64) -> bool {
        false
    }
}

impl Forecaster for TSB {
    fn forecast(&self, series: &DemandSeries, horizon: &Horizon) -> Result<Forecast> {
        let alpha = validate_alpha(self.alpha)?;
        validate_beta(self.beta)?;
        forecast_series(self, self.name(), series, horizon, alpha)
    }

    fn name(&self) -> &str {
        "TSB"
    }
}
