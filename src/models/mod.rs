//! Forecasting models.

mod config;
mod method;
mod traits;

pub mod exponential;
pub mod intermittent;
pub mod params;

pub use config::ForecastConfig;
pub use method::Method;
pub use traits::{BoxedForecaster, Forecaster};
