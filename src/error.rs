//! Error types for the fallible edges of the crate.
//!
//! The kinematics engine and the controller never fail: every input they take
//! is clamped. Only configuration loading and clock-string parsing can reject
//! their input.

use std::fmt;

/// Configuration could not be loaded or failed validation.
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON for [`crate::Geometry`].
    Json(serde_json::Error),

    /// A value parsed but is outside the range the physics can handle.
    InvalidValue {
        /// Field name as it appears in the JSON document.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(err) => write!(f, "invalid geometry config: {}", err),
            ConfigError::InvalidValue {
                name,
                value,
                expected,
            } => write!(f, "config value '{}' = {} is invalid (expected {})", name, value, expected),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

/// A clock string is not of the form `MM:SS:CS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    /// Wrong number of `:`-separated fields.
    FieldCount { found: usize },
    /// A field is not exactly two ASCII digits.
    BadField { field: String },
    /// The seconds field is 60 or more.
    SecondsOutOfRange { seconds: u32 },
}

impl fmt::Display for TimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormatError::FieldCount { found } => {
                write!(f, "expected 3 fields in MM:SS:CS, found {}", found)
            }
            TimeFormatError::BadField { field } => {
                write!(f, "field '{}' is not two digits", field)
            }
            TimeFormatError::SecondsOutOfRange { seconds } => {
                write!(f, "seconds field {} is not below 60", seconds)
            }
        }
    }
}

impl std::error::Error for TimeFormatError {}
