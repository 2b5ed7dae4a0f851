//! Error types for the anofox-intermittent library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An observation is negative, NaN or infinite.
    #[error("invalid demand value {value} at index {index}")]
    InvalidValue { index: usize, value: f64 },

    /// The series does not start with a demand event.
    #[error("series must start with a nonzero observation")]
    LeadingZero,

    /// No strictly positive observation was found.
    #[error("series contains no demand")]
    NoDemand,

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// MASE scaling factor is zero or undefined (constant or single-point series).
    #[error("MASE is undefined: the realized series has no variation")]
    UndefinedMase,

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ForecastError::EmptyData;
        assert_eq!(err.to_string(), "empty input data");

        let err = ForecastError::InsufficientData { needed: 2, got: 1 };
        assert_eq!(err.to_string(), "insufficient data: need at least 2, got 1");

        let err = ForecastError::InvalidParameter("alpha must be in (0, 1]".to_string());
        assert_eq!(err.to_string(), "invalid parameter: alpha must be in (0, 1]");

        let err = ForecastError::InvalidValue {
            index: 3,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid demand value -1 at index 3");

        let err = ForecastError::LeadingZero;
        assert_eq!(
            err.to_string(),
            "series must start with a nonzero observation"
        );

        let err = ForecastError::UndefinedMase;
        assert_eq!(
            err.to_string(),
            "MASE is undefined: the realized series has no variation"
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ForecastError::NoDemand;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
        assert_ne!(err1, ForecastError::LeadingZero);
    }
}
