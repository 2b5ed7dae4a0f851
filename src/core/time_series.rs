//! Daily demand series and the calendar step used to extend forecasts.

use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Calendar step between consecutive forecast periods, in whole days.
///
/// Parsed from pandas-style frequency strings such as `"1d"`, `"7D"` or `"2w"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Frequency {
    days: u32,
}

impl Frequency {
    /// One period per day.
    pub fn daily() -> Self {
        Self { days: 1 }
    }

    /// One period per week.
    pub fn weekly() -> Self {
        Self { days: 7 }
    }

    /// A step of `days` days.
    pub fn days(days: u32) -> Result<Self> {
        if days == 0 {
            return Err(ForecastError::InvalidParameter(
                "frequency must be at least one day".to_string(),
            ));
        }
        Ok(Self { days })
    }

    /// Step length in days.
    pub fn as_days(&self) -> u32 {
        self.days
    }

    /// Date `k` steps after `date`.
    pub fn advance(&self, date: NaiveDate, k: usize) -> Result<NaiveDate> {
        let offset = (self.days as u64)
            .checked_mul(k as u64)
            .ok_or_else(|| ForecastError::TimestampError("calendar overflow".to_string()))?;
        date.checked_add_days(Days::new(offset))
            .ok_or_else(|| ForecastError::TimestampError("calendar overflow".to_string()))
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::daily()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days)
    }
}

impl FromStr for Frequency {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (count, unit) = s.split_at(split);

        let count: u32 = if count.is_empty() {
            1
        } else {
            count.parse().map_err(|_| {
                ForecastError::InvalidParameter(format!("invalid frequency '{s}'"))
            })?
        };

        let per_unit = match unit {
            "d" => 1,
            "w" => 7,
            _ => {
                return Err(ForecastError::InvalidParameter(format!(
                    "unsupported frequency '{s}' (expected e.g. '1d' or '1w')"
                )))
            }
        };

        let days = count.checked_mul(per_unit).ok_or_else(|| {
            ForecastError::InvalidParameter(format!("frequency '{s}' is too large"))
        })?;
        Self::days(days)
    }
}

impl TryFrom<String> for Frequency {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(freq: Frequency) -> Self {
        freq.to_string()
    }
}

/// How far past the observed span a forecast is extended.
///
/// `n_steps` counts the last observed period, so a horizon of `n_steps`
/// appends `n_steps - 1` future periods; 0 and 1 both mean no extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Horizon {
    n_steps: usize,
    frequency: Frequency,
}

impl Horizon {
    pub fn new(n_steps: usize, frequency: Frequency) -> Self {
        Self { n_steps, frequency }
    }

    /// Daily horizon of `n_steps`.
    pub fn steps(n_steps: usize) -> Self {
        Self::new(n_steps, Frequency::daily())
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Number of periods appended after the last observation.
    pub fn extension_len(&self) -> usize {
        self.n_steps.saturating_sub(1)
    }

    /// Timestamps of the appended periods, starting one step after `last`.
    pub fn future_dates(&self, last: NaiveDate) -> Result<Vec<NaiveDate>> {
        (1..=self.extension_len())
            .map(|k| self.frequency.advance(last, k))
            .collect()
    }
}

/// A contiguous, zero-filled daily demand series whose first value is nonzero.
///
/// Every constructor enforces these preconditions, so forecasting code can
/// rely on them without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandSeries {
    start: NaiveDate,
    values: Vec<f64>,
}

impl DemandSeries {
    /// Create a series of daily values starting at `start`.
    pub fn new(start: NaiveDate, values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ForecastError::InvalidValue { index, value });
            }
        }

        if values[0] == 0.0 {
            return Err(ForecastError::LeadingZero);
        }

        // The last date must be representable.
        start
            .checked_add_days(Days::new(values.len() as u64 - 1))
            .ok_or_else(|| ForecastError::TimestampError("calendar overflow".to_string()))?;

        Ok(Self { start, values })
    }

    /// Create a series from explicit dates, which must be consecutive days.
    pub fn from_dated(dates: &[NaiveDate], values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: dates.len(),
                got: values.len(),
            });
        }

        let start = *dates.first().ok_or(ForecastError::EmptyData)?;
        for pair in dates.windows(2) {
            if pair[0].succ_opt() != Some(pair[1]) {
                return Err(ForecastError::TimestampError(format!(
                    "series is not contiguous and daily: {} is followed by {}",
                    pair[0], pair[1]
                )));
            }
        }

        Self::new(start, values)
    }

    /// Build the daily calendar from sparse dated observations.
    ///
    /// Observations are sorted, values on the same date are summed, missing
    /// days are filled with zero, and the calendar starts at the first date
    /// with positive demand.
    pub fn from_observations(observations: &[(NaiveDate, f64)]) -> Result<Self> {
        if observations.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for (index, &(date, value)) in observations.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ForecastError::InvalidValue { index, value });
            }
            *by_date.entry(date).or_insert(0.0) += value;
        }

        let start = by_date
            .iter()
            .find(|(_, v)| **v > 0.0)
            .map(|(&d, _)| d)
            .ok_or(ForecastError::NoDemand)?;
        let end = by_date.keys().next_back().copied().unwrap_or(start);

        let values: Vec<f64> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| by_date.get(&d).copied().unwrap_or(0.0))
            .collect();

        Self::new(start, values)
    }

    /// Number of observed days.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Date of the last observation.
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(self.values.len() as u64 - 1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Date of observation `index`, if it lies within the series.
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        if index >= self.values.len() {
            return None;
        }
        self.start.checked_add_days(Days::new(index as u64))
    }

    /// All observation dates in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(self.values.len()).collect()
    }

    /// Mean over every day, zeros included.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Number of zero-demand days.
    pub fn zero_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == 0.0).count()
    }
}
