//! Core data structures for intermittent demand forecasting.

mod forecast;
mod time_series;

pub use forecast::Forecast;
pub use time_series::{DemandSeries, Frequency, Horizon};
