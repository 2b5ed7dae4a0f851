//! Shared state machine behind the Croston family and TSB.
//!
//! Every method keeps a demand-size level `L`, an interval (or probability)
//! estimate `P` and a forecast `F`. State at `t + 1` is derived from state at
//! `t` and the observation `x_t`:
//!
//! - demand (`x_t > 0`): the next demand size `v` and interval `q` are
//!   consumed, `L' = α·v + (1 − α)·L`, `P'` follows [`IntervalRule::on_demand`]
//!   and `F'` follows [`IntervalRule::estimate`];
//! - no demand: `L' = L`, `P'` follows [`IntervalRule::on_idle`] and `F'`
//!   follows [`IntervalRule::idle_estimate`], which may use the most recently
//!   consumed interval.
//!
//! When the rule reports a degenerate interval (zero for interval-style
//! rules) the forecast falls back to [`IntervalRule::fallback`] applied to
//! the level before the update.

use crate::core::{DemandSeries, Forecast, Horizon};
use crate::error::{ForecastError, Result};
use crate::features::extract_demand_values;

/// Method-specific pieces of the recursion.
pub trait IntervalRule {
    /// Interval estimate after a demand with preceding interval `q`.
    fn on_demand(&self, interval: f64, q: f64, alpha: f64) -> f64;

    /// Interval estimate after a period without demand.
    fn on_idle(&self, interval: f64) -> f64 {
        interval
    }

    /// Forecast from a level and a non-degenerate interval.
    fn estimate(&self, level: f64, interval: f64, alpha: f64) -> f64;

    /// Forecast after a period without demand. `last_q` is the most recently
    /// consumed interval.
    fn idle_estimate(&self, level: f64, interval: f64, last_q: f64, alpha: f64) -> f64 {
        let _ = last_q;
        self.estimate(level, interval, alpha)
    }

    /// Forecast used when the interval estimate is degenerate.
    fn fallback(&self, level: f64, alpha: f64) -> f64 {
        let _ = alpha;
        level
    }

    /// Whether `interval` leaves the forecast formula undefined.
    fn is_degenerate(&self, interval: f64) -> bool {
        interval == 0.0
    }
}

/// Smoothing state at one time index.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SmoothingState {
    level: f64,
    interval: f64,
    forecast: f64,
    /// Interval consumed by the most recent demand event.
    last_q: f64,
}

/// State series produced by one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub level: Vec<f64>,
    pub interval: Vec<f64>,
    pub forecast: Vec<f64>,
}

/// Run the recursion over `values`.
///
/// `values` must be non-empty and start with a positive observation.
pub fn run<R: IntervalRule + ?Sized>(
    rule: &R,
    values: &[f64],
    alpha: f64,
) -> Result<Trajectory> {
    let events = extract_demand_values(values)?;
    let n = values.len();

    let mut level = Vec::with_capacity(n);
    let mut interval = Vec::with_capacity(n);
    let mut forecast = Vec::with_capacity(n);

    let mut state = SmoothingState {
        level: values[0],
        interval: 1.0,
        forecast: rule.estimate(values[0], 1.0, alpha),
        last_q: 1.0,
    };
    let mut demands = events.iter();

    for &x in &values[..n - 1] {
        level.push(state.level);
        interval.push(state.interval);
        forecast.push(state.forecast);

        let previous_level = state.level;
        state = if x > 0.0 {
            let (v, q) = demands.next().ok_or_else(|| {
                ForecastError::ComputationError("demand events exhausted".to_string())
            })?;
            let new_level = alpha * v + (1.0 - alpha) * state.level;
            let new_interval = rule.on_demand(state.interval, q, alpha);
            let new_forecast = if rule.is_degenerate(new_interval) {
                rule.fallback(previous_level, alpha)
            } else {
                rule.estimate(new_level, new_interval, alpha)
            };
            SmoothingState {
                level: new_level,
                interval: new_interval,
                forecast: new_forecast,
                last_q: q,
            }
        } else {
            let new_interval = rule.on_idle(state.interval);
            let new_forecast = if rule.is_degenerate(new_interval) {
                rule.fallback(previous_level, alpha)
            } else {
                rule.idle_estimate(state.level, new_interval, state.last_q, alpha)
            };
            SmoothingState {
                interval: new_interval,
                forecast: new_forecast,
                ..state
            }
        };
    }

    level.push(state.level);
    interval.push(state.interval);
    forecast.push(state.forecast);

    Ok(Trajectory {
        level,
        interval,
        forecast,
    })
}

/// Run the recursion on a validated series and extend it to `horizon`.
pub fn forecast_series<R: IntervalRule + ?Sized>(
    rule: &R,
    name: &str,
    series: &DemandSeries,
    horizon: &Horizon,
    alpha: f64,
) -> Result<Forecast> {
    let trajectory = run(rule, series.values(), alpha)?;

    tracing::debug!(
        method = name,
        alpha,
        periods = series.len(),
        demands = series.len() - series.zero_count(),
        extension = horizon.extension_len(),
        "ran intermittent recursion"
    );

    extend(
        name,
        series,
        horizon,
        trajectory.level,
        Some(trajectory.interval),
        trajectory.forecast,
    )
}

/// Append the flat extension and attach dates.
pub(crate) fn extend(
    name: &str,
    series: &DemandSeries,
    horizon: &Horizon,
    level: Vec<f64>,
    interval: Option<Vec<f64>>,
    mut forecast: Vec<f64>,
) -> Result<Forecast> {
    let last = forecast.last().copied().ok_or(ForecastError::EmptyData)?;
    let future = horizon.future_dates(series.end())?;
    forecast.extend(std::iter::repeat(last).take(future.len()));

    let mut dates = series.dates();
    dates.extend(future);

    Forecast::new(name, dates, level, interval, forecast)
}
