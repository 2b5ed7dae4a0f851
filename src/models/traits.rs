//! Forecaster trait defining the common interface for all models.

use crate::core::{DemandSeries, Forecast, Horizon};
use crate::error::Result;

/// Common interface for all forecasting models.
///
/// A forecast call is self-contained: it reads the series, runs one
/// recursion pass and returns freshly allocated state. Models hold only
/// their parameters, so one instance can serve many calls, including calls
/// from different threads.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Run the recursion over `series` and extend the forecast to `horizon`.
    fn forecast(&self, series: &DemandSeries, horizon: &Horizon) -> Result<Forecast>;

    /// Get the model name.
    fn name(&self) -> &str;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use anofox_intermittent::core::{DemandSeries, Horizon};
/// use anofox_intermittent::models::intermittent::Croston;
/// use anofox_intermittent::models::BoxedForecaster;
/// use chrono::NaiveDate;
///
/// let model: BoxedForecaster = Box::new(Croston::new().sba());
/// assert_eq!(model.name(), "SBA");
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let ts = DemandSeries::new(start, vec![3.0, 0.0, 0.0, 4.0]).unwrap();
/// let forecast = model.forecast(&ts, &Horizon::steps(3)).unwrap();
/// assert_eq!(forecast.len(), 6);
/// ```
pub type BoxedForecaster = Box<dyn Forecaster + Send + Sync>;
