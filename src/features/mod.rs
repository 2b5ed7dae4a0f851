//! Demand features: event extraction and pattern classification.
//!
//! # Example
//!
//! ```
//! use anofox_intermittent::core::DemandSeries;
//! use anofox_intermittent::features::{classify, extract_demand, DemandPattern};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2020, 8, 21).unwrap();
//! let values = vec![5.0, 10.0, 0.0, 0.0, 0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 6.0, 0.0];
//! let ts = DemandSeries::new(start, values).unwrap();
//!
//! let events = extract_demand(&ts);
//! assert_eq!(events.sizes(), &[5.0, 10.0, 7.0, 6.0]);
//!
//! let result = classify(&ts);
//! assert_eq!(result.pattern, DemandPattern::Lumpy);
//! ```

pub mod classification;
pub mod demand;

pub use classification::{
    average_demand_interval, classify, squared_cv, Classification, DemandPattern, ADI_THRESHOLD,
    CV2_THRESHOLD,
};
pub use demand::{extract_demand, extract_demand_values, DemandEvents};
