//! Demand-size and inter-demand-interval extraction.

use crate::core::DemandSeries;
use crate::error::{ForecastError, Result};

/// Nonzero demand sizes and the intervals that precede them.
///
/// `intervals[k]` is the number of zero periods between demand `k - 1` and
/// demand `k`. The first interval is 1 by convention, since nothing is
/// observed before the first demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandEvents {
    sizes: Vec<f64>,
    intervals: Vec<f64>,
}

impl DemandEvents {
    /// Demand sizes in chronological order.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Inter-demand intervals, one per demand size.
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// Number of demand events.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sum of all intervals.
    pub fn total_interval(&self) -> f64 {
        self.intervals.iter().sum()
    }

    /// Iterate over `(size, interval)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.sizes
            .iter()
            .copied()
            .zip(self.intervals.iter().copied())
    }
}

/// Extract demand events from a validated series.
pub fn extract_demand(series: &DemandSeries) -> DemandEvents {
    scan(series.values())
}

/// Extract demand events from raw daily values.
///
/// The slice must be non-empty and start with a positive value; trailing
/// zeros after the last demand do not belong to any interval.
pub fn extract_demand_values(values: &[f64]) -> Result<DemandEvents> {
    match values.first() {
        None => Err(ForecastError::EmptyData),
        Some(&first) if first <= 0.0 => Err(ForecastError::LeadingZero),
        Some(_) => Ok(scan(values)),
    }
}

fn scan(values: &[f64]) -> DemandEvents {
    let mut sizes = Vec::new();
    let mut intervals = Vec::new();
    let mut last_demand: Option<usize> = None;

    for (t, &x) in values.iter().enumerate() {
        if x > 0.0 {
            let interval = match last_demand {
                None => 1,
                Some(prev) => values[prev + 1..t].iter().filter(|&&v| v == 0.0).count(),
            };
            sizes.push(x);
            intervals.push(interval as f64);
            last_demand = Some(t);
        }
    }

    tracing::debug!(
        periods = values.len(),
        demands = sizes.len(),
        "extracted demand events"
    );

    DemandEvents { sizes, intervals }
}
