//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code outside the supported set
    #[error("Unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    /// Wrong field count or a field that is not a valid number
    #[error("Malformed input record [{record}]: {reason}")]
    MalformedInput { record: String, reason: String },

    /// A numeric field or computed result outside its allowed range
    #[error("Invalid value for {field}: {value}")]
    InvalidDomainValue { field: &'static str, value: f64 },

    /// A calculation variant without a calorie formula
    #[error("Calorie calculation is not implemented for {0}")]
    NotImplemented(&'static str),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Errors caused by a single bad record; the rest of a batch can continue.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownWorkoutType(_)
                | Error::MalformedInput { .. }
                | Error::InvalidDomainValue { .. }
        )
    }

    /// Errors that must stop processing altogether
    pub fn is_fatal(&self) -> bool {
        !self.is_record_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_errors_are_not_fatal() {
        assert!(!Error::UnknownWorkoutType("XYZ".into()).is_fatal());
        assert!(!Error::MalformedInput {
            record: "RUN,1".into(),
            reason: "expected 3 fields".into(),
        }
        .is_fatal());
        assert!(!Error::InvalidDomainValue {
            field: "height",
            value: 0.0,
        }
        .is_fatal());
    }

    #[test]
    fn test_not_implemented_is_fatal() {
        let err = Error::NotImplemented("Training");
        assert!(err.is_fatal());
        assert!(!err.is_record_error());
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = Error::UnknownWorkoutType("XYZ".into());
        assert!(err.to_string().contains("XYZ"));

        let err = Error::InvalidDomainValue {
            field: "duration",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for duration: -1"
        );
    }
}
