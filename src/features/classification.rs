//! Demand pattern classification (Syntetos-Boylan-Croston scheme).
//!
//! A series is placed in one of four quadrants using its average demand
//! interval (ADI) and squared coefficient of variation (CV²):
//!
//! | ADI > 1.32 | CV² < 0.49   | CV² > 0.49 |
//! |------------|--------------|------------|
//! | true       | Intermittent | Lumpy      |
//! | false      | Smooth       | Erratic    |
//!
//! CV² is scaled to the whole series: squared deviations of the demand
//! sizes from the mean of every period, divided by the number of periods
//! and by that same mean. The thresholds are calibrated against this form.

use super::demand::extract_demand;
use crate::core::DemandSeries;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ADI cut-off between frequent and infrequent demand.
pub const ADI_THRESHOLD: f64 = 1.32;

/// CV² cut-off between regular and variable demand sizes.
pub const CV2_THRESHOLD: f64 = 0.49;

/// Qualitative demand pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandPattern {
    Smooth,
    Intermittent,
    Erratic,
    Lumpy,
}

impl DemandPattern {
    /// Map ADI and CV² onto a pattern.
    ///
    /// Comparisons are strict and evaluated in the order Intermittent, Lumpy,
    /// Erratic; anything left over (including values exactly on a threshold)
    /// is Smooth.
    pub fn from_statistics(adi: f64, cv_squared: f64) -> Self {
        if adi > ADI_THRESHOLD && cv_squared < CV2_THRESHOLD {
            DemandPattern::Intermittent
        } else if adi > ADI_THRESHOLD && cv_squared > CV2_THRESHOLD {
            DemandPattern::Lumpy
        } else if adi < ADI_THRESHOLD && cv_squared > CV2_THRESHOLD {
            DemandPattern::Erratic
        } else {
            DemandPattern::Smooth
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DemandPattern::Smooth => "Smooth",
            DemandPattern::Intermittent => "Intermittent",
            DemandPattern::Erratic => "Erratic",
            DemandPattern::Lumpy => "Lumpy",
        }
    }
}

impl fmt::Display for DemandPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification statistics and the resulting pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Average demand interval.
    pub adi: f64,
    /// Squared coefficient of variation.
    pub cv_squared: f64,
    pub pattern: DemandPattern,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ADI: {:.3}, CV²: {:.3}, Type: {}",
            self.adi, self.cv_squared, self.pattern
        )
    }
}

/// Average demand interval: total interval length per demand event.
pub fn average_demand_interval(series: &DemandSeries) -> f64 {
    let events = extract_demand(series);
    events.total_interval() / events.len() as f64
}

/// Squared coefficient of variation of demand sizes, scaled to the series.
pub fn squared_cv(series: &DemandSeries) -> f64 {
    let events = extract_demand(series);
    scaled_dispersion(events.sizes(), series)
}

fn scaled_dispersion(sizes: &[f64], series: &DemandSeries) -> f64 {
    let mean = series.mean();
    let squared: f64 = sizes.iter().map(|v| (v - mean).powi(2)).sum();
    squared / series.len() as f64 / mean
}

/// Compute ADI and CV² and classify the demand pattern.
pub fn classify(series: &DemandSeries) -> Classification {
    let events = extract_demand(series);
    let adi = events.total_interval() / events.len() as f64;
    let cv_squared = scaled_dispersion(events.sizes(), series);
    let pattern = DemandPattern::from_statistics(adi, cv_squared);

    tracing::debug!(adi, cv_squared, %pattern, "classified demand pattern");

    Classification {
        adi,
        cv_squared,
        pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn series(values: Vec<f64>) -> DemandSeries {
        DemandSeries::new(NaiveDate::from_ymd_opt(2020, 8, 21).unwrap(), values).unwrap()
    }

    #[test]
    fn classify_canonical_series() {
        let ts = series(vec![
            5.0, 10.0, 0.0, 0.0, 0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 6.0, 0.0,
        ]);
        let result = classify(&ts);

        // mean = 7/3; squared deviations of [5, 10, 7, 6] sum to 910/9.
        assert_relative_eq!(result.adi, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.cv_squared, 65.0 / 18.0, epsilon = 1e-12);
        assert_eq!(result.pattern, DemandPattern::Lumpy);
        assert_eq!(result.to_string(), "ADI: 2.000, CV²: 3.611, Type: Lumpy");

        assert_relative_eq!(average_demand_interval(&ts), result.adi, epsilon = 1e-12);
        assert_relative_eq!(squared_cv(&ts), result.cv_squared, epsilon = 1e-12);
    }

    #[test]
    fn constant_daily_demand_is_smooth() {
        let ts = series(vec![4.0; 10]);
        let result = classify(&ts);

        // First interval is the seeded 1, the rest are 0.
        assert_relative_eq!(result.adi, 0.1, epsilon = 1e-12);
        assert_relative_eq!(result.cv_squared, 0.0, epsilon = 1e-12);
        assert_eq!(result.pattern, DemandPattern::Smooth);
    }

    #[test]
    fn quadrants() {
        assert_eq!(
            DemandPattern::from_statistics(2.0, 0.2),
            DemandPattern::Intermittent
        );
        assert_eq!(DemandPattern::from_statistics(2.0, 0.8), DemandPattern::Lumpy);
        assert_eq!(
            DemandPattern::from_statistics(1.0, 0.8),
            DemandPattern::Erratic
        );
        assert_eq!(DemandPattern::from_statistics(1.0, 0.2), DemandPattern::Smooth);
    }

    #[test]
    fn thresholds_fall_through_to_smooth() {
        assert_eq!(
            DemandPattern::from_statistics(ADI_THRESHOLD, CV2_THRESHOLD),
            DemandPattern::Smooth
        );
        assert_eq!(
            DemandPattern::from_statistics(2.0, CV2_THRESHOLD),
            DemandPattern::Smooth
        );
        assert_eq!(
            DemandPattern::from_statistics(ADI_THRESHOLD, 0.8),
            DemandPattern::Smooth
        );
        assert_eq!(
            DemandPattern::from_statistics(ADI_THRESHOLD, 0.2),
            DemandPattern::Smooth
        );
    }

    #[test]
    fn series_on_adi_threshold_is_smooth() {
        // 25 unit demands; the 24 gaps after the first hold 32 zeros in total.
        let mut values = vec![1.0];
        for k in 0..24 {
            if k < 8 {
                values.extend([0.0; 4]);
            }
            values.push(1.0);
        }
        let result = classify(&series(values));

        assert_eq!(result.adi, ADI_THRESHOLD);
        assert!(result.cv_squared < CV2_THRESHOLD);
        assert_eq!(result.pattern, DemandPattern::Smooth);
    }

    #[test]
    fn pattern_names() {
        assert_eq!(DemandPattern::Intermittent.to_string(), "Intermittent");
        assert_eq!(DemandPattern::Erratic.as_str(), "Erratic");
    }
}
