//! Exponential smoothing baseline.

mod ses;

pub use ses::SimpleExponentialSmoothing;
