//! Smoothing parameter validation.

use crate::error::{ForecastError, Result};

/// Default smoothing constant for demand level and interval.
pub const DEFAULT_ALPHA: f64 = 0.1;

/// Default smoothing constant for demand probability.
pub const DEFAULT_BETA: f64 = 0.1;

/// Check that `alpha` lies in (0, 1].
pub fn validate_alpha(alpha: f64) -> Result<f64> {
    if alpha.is_finite() && alpha > 0.0 && alpha <= 1.0 {
        Ok(alpha)
    } else {
        Err(ForecastError::InvalidParameter(format!(
            "alpha must be in (0, 1], got {alpha}"
        )))
    }
}

/// Check that `beta` lies in [0, 1).
pub fn validate_beta(beta: f64) -> Result<f64> {
    if beta.is_finite() && (0.0..1.0).contains(&beta) {
        Ok(beta)
    } else {
        Err(ForecastError::InvalidParameter(format!(
            "beta must be in [0, 1), got {beta}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_range() {
        assert_eq!(validate_alpha(0.5), Ok(0.5));
        assert_eq!(validate_alpha(1.0), Ok(1.0));
        assert!(validate_alpha(0.0).is_err());
        assert!(validate_alpha(-0.1).is_err());
        assert!(validate_alpha(1.01).is_err());
        assert!(validate_alpha(f64::NAN).is_err());
    }

    #[test]
    fn beta_range() {
        assert_eq!(validate_beta(0.0), Ok(0.0));
        assert_eq!(validate_beta(0.99), Ok(0.99));
        assert!(validate_beta(1.0).is_err());
        assert!(validate_beta(-0.5).is_err());
        assert!(validate_beta(f64::INFINITY).is_err());
    }

    #[test]
    fn error_names_the_parameter() {
        let err = validate_alpha(2.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid parameter: alpha must be in (0, 1], got 2");
    }
}
