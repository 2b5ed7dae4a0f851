//! Utility functions for forecast evaluation.

pub mod metrics;

pub use metrics::{evaluate, mase, rmse, AccuracyMetrics};
