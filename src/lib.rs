//! # anofox-intermittent
//!
//! Forecasting for intermittent demand series.
//!
//! Provides the Croston family (classic Croston, SBA, SBJ, HES, LES), the
//! TSB probability model and simple exponential smoothing as a baseline,
//! along with demand-pattern classification (ADI / CV²) and accuracy
//! metrics (MASE, RMSE).
//!
//! ```
//! use anofox_intermittent::prelude::*;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2020, 8, 21).unwrap();
//! let values = vec![5.0, 10.0, 0.0, 0.0, 0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 6.0, 0.0];
//! let series = DemandSeries::new(start, values).unwrap();
//!
//! assert_eq!(classify(&series).pattern, DemandPattern::Lumpy);
//!
//! let forecast = Croston::new()
//!     .with_alpha(0.5)
//!     .forecast(&series, &Horizon::steps(4))
//!     .unwrap();
//! assert_eq!(forecast.len(), 15);
//! assert_eq!(forecast.extension(), &[3.3125, 3.3125, 3.3125]);
//! ```

#![allow(clippy::upper_case_acronyms)]

pub mod core;
pub mod error;
pub mod features;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{DemandSeries, Forecast, Frequency, Horizon};
    pub use crate::error::{ForecastError, Result};
    pub use crate::features::{classify, extract_demand, Classification, DemandPattern};
    pub use crate::models::exponential::SimpleExponentialSmoothing;
    pub use crate::models::intermittent::{Croston, CrostonVariant, TSB};
    pub use crate::models::{ForecastConfig, Forecaster, Method};
    pub use crate::utils::{evaluate, AccuracyMetrics};
}
