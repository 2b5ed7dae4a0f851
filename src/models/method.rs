//! Named forecasting methods and a factory for boxed models.

use super::exponential::SimpleExponentialSmoothing;
use super::intermittent::{Croston, CrostonVariant, TSB};
use super::BoxedForecaster;
use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven supported forecasting methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Croston,
    Sba,
    Sbj,
    Tsb,
    Hes,
    Les,
    Ses,
}

impl Method {
    /// Every method, in the order they are usually reported.
    pub const ALL: [Method; 7] = [
        Method::Croston,
        Method::Sba,
        Method::Sbj,
        Method::Tsb,
        Method::Hes,
        Method::Les,
        Method::Ses,
    ];

    /// Lowercase identifier used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Croston => "croston",
            Method::Sba => "sba",
            Method::Sbj => "sbj",
            Method::Tsb => "tsb",
            Method::Hes => "hes",
            Method::Les => "les",
            Method::Ses => "ses",
        }
    }

    /// Whether the method uses the probability smoothing constant.
    pub fn uses_beta(&self) -> bool {
        matches!(self, Method::Tsb)
    }

    /// Build a model. `beta` is ignored by every method except TSB.
    pub fn build(&self, alpha: f64, beta: f64) -> BoxedForecaster {
        let croston = |variant| -> BoxedForecaster {
            Box::new(Croston::new().with_alpha(alpha).with_variant(variant))
        };
        match self {
            Method::Croston => croston(CrostonVariant::Classic),
            Method::Sba => croston(CrostonVariant::SBA),
            Method::Sbj => croston(CrostonVariant::SBJ),
            Method::Hes => croston(CrostonVariant::HES),
            Method::Les => croston(CrostonVariant::LES),
            Method::Tsb => Box::new(TSB::new().with_params(alpha, beta)),
            Method::Ses => Box::new(SimpleExponentialSmoothing::new(alpha)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| ForecastError::InvalidParameter(format!("unknown method '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_names_match() {
        let names: Vec<String> = Method::ALL
            .iter()
            .map(|m| m.build(0.2, 0.1).name().to_string())
            .collect();
        assert_eq!(names, ["Croston", "SBA", "SBJ", "TSB", "HES", "LES", "SES"]);
    }

    #[test]
    fn parse_round_trips_display() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
        assert_eq!(" SBA ".parse::<Method>().unwrap(), Method::Sba);
        assert!("holt".parse::<Method>().is_err());
    }

    #[test]
    fn only_tsb_uses_beta() {
        let users: Vec<Method> = Method::ALL.into_iter().filter(Method::uses_beta).collect();
        assert_eq!(users, vec![Method::Tsb]);
    }
}
