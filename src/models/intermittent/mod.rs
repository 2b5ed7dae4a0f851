//! Intermittent demand forecasting models.
//!
//! This module provides models specifically designed for intermittent demand,
//! where demand is sporadic with many zero-demand periods interspersed with
//! occasional non-zero demands.
//!
//! Models included:
//! - Croston: Classic, SBA, SBJ, HES and LES variants
//! - TSB: Teunter-Syntetos-Babai
//!
//! All of them run the same recursion (see [`recursion`]) and differ only in
//! their [`IntervalRule`].

pub mod recursion;

mod croston;
mod tsb;

pub use croston::{Croston, CrostonVariant};
pub use recursion::IntervalRule;
pub use tsb::TSB;
