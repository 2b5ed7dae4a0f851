//! Croston's method and its bias-corrected variants.
//!
//! Croston's method smooths demand sizes and inter-demand intervals
//! separately and forecasts their ratio. Interval estimates are truncated to
//! whole periods. The variants differ only in how the ratio is corrected:
//!
//! | Variant | Forecast                      | Extra term without demand          |
//! |---------|-------------------------------|------------------------------------|
//! | Classic | `L / P`                       | none                               |
//! | SBA     | `(1 − α/2) · L / P`           | none                               |
//! | SBJ     | `(1 − α/(2 − α)) · L / P`     | none                               |
//! | HES     | `L / P`                       | `L / (P + α·q/2)`                  |
//! | LES     | `L / P`                       | `(L / P) · (1 − α·q/(2P))`         |
//!
//! References:
//! - Croston, J. D. (1972). "Forecasting and stock control for intermittent demands."
//! - Syntetos, A. A. & Boylan, J. E. (2005). "The accuracy of intermittent demand estimates."
//! - Shale, E. A., Boylan, J. E. & Johnston, F. R. (2006). "Forecasting for intermittent
//!   demand: the estimation of an unbiased average."
//! - Prestwich, S. et al. (2014). "Mean-based error measures for intermittent demand
//!   forecasting."

use super::recursion::{forecast_series, IntervalRule};
use crate::core::{DemandSeries, Forecast, Horizon};
use crate::error::Result;
use crate::models::params::{validate_alpha, DEFAULT_ALPHA};
use crate::models::Forecaster;

/// Croston's method variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrostonVariant {
    /// Classic Croston method.
    Classic,
    /// Syntetos-Boylan Approximation.
    SBA,
    /// Shale-Boylan-Johnston correction.
    SBJ,
    /// Hyperbolic-exponential smoothing (Prestwich et al.).
    HES,
    /// Linear-exponential smoothing.
    LES,
}

impl CrostonVariant {
    /// Multiplicative bias-correction factor applied to `L / P`.
    pub fn correction(&self, alpha: f64) -> f64 {
        match self {
            CrostonVariant::SBA => 1.0 - alpha / 2.0,
            CrostonVariant::SBJ => 1.0 - alpha / (2.0 - alpha),
            CrostonVariant::Classic | CrostonVariant::HES | CrostonVariant::LES => 1.0,
        }
    }
}

/// Croston's method for intermittent demand forecasting.
#[derive(Debug, Clone)]
pub struct Croston {
    /// Smoothing parameter, in (0, 1].
    alpha: f64,
    /// Variant of Croston's method.
    variant: CrostonVariant,
}

impl Croston {
    /// Create a classic Croston model with default alpha (0.1).
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            variant: CrostonVariant::Classic,
        }
    }

    /// Set the smoothing parameter. Checked when forecasting.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Select a variant.
    pub fn with_variant(mut self, variant: CrostonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Use the Syntetos-Boylan Approximation.
    pub fn sba(self) -> Self {
        self.with_variant(CrostonVariant::SBA)
    }

    /// Use the Shale-Boylan-Johnston correction.
    pub fn sbj(self) -> Self {
        self.with_variant(CrostonVariant::SBJ)
    }

    /// Use hyperbolic-exponential smoothing.
    pub fn hes(self) -> Self {
        self.with_variant(CrostonVariant::HES)
    }

    /// Use linear-exponential smoothing.
    pub fn les(self) -> Self {
        self.with_variant(CrostonVariant::LES)
    }

    /// Get the current alpha value.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the variant being used.
    pub fn variant(&self) -> CrostonVariant {
        self.variant
    }
}

impl Default for Croston {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalRule for Croston {
    fn on_demand(&self, interval: f64, q: f64, alpha: f64) -> f64 {
        (alpha * q + (1.0 - alpha) * interval).floor()
    }

    fn estimate(&self, level: f64, interval: f64, alpha: f64) -> f64 {
        self.variant.correction(alpha) * (level / interval)
    }

    fn idle_estimate(&self, level: f64, interval: f64, last_q: f64, alpha: f64) -> f64 {
        match self.variant {
            CrostonVariant::HES => level / (interval + alpha * last_q / 2.0),
            CrostonVariant::LES => {
                (level / interval) * (1.0 - alpha * last_q / (2.0 * interval))
            }
            _ => self.estimate(level, interval, alpha),
        }
    }

    fn fallback(&self, level: f64, alpha: f64) -> f64 {
        self.variant.correction(alpha) * level
    }
}

impl Forecaster for Croston {
    fn forecast(&self, series: &DemandSeries, horizon: &Horizon) -> Result<Forecast> {
        let alpha = validate_alpha(self.alpha)?;
        forecast_series(self, self.name(), series, horizon, alpha)
    }

    fn name(&self) -> &str {
        match self.variant {
            CrostonVariant::Classic => "Croston",
            CrostonVariant::SBA => "SBA",
            CrostonVariant::SBJ => "SBJ",
            CrostonVariant::HES => "HES",
            CrostonVariant::LES => "LES",
        }
    }
}
