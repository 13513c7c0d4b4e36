//! Domain error types
//!
//! This module defines the error hierarchy for medrec. The two record-level
//! failure kinds are [`RecordError::UnknownDepartment`] and
//! [`RecordError::InvalidState`]; the remaining variants cover configuration
//! and I/O around the record pipeline.

use thiserror::Error;

/// Main medrec error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The requested department is not registered
    ///
    /// Callers report this and carry on; it is never fatal.
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    /// A builder was asked to build with required fields missing
    #[error("Invalid builder state: {0}")]
    InvalidState(String),

    /// The id counter has no values left to issue
    #[error("Record id counter exhausted at {0}")]
    IdsExhausted(u64),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl RecordError {
    /// Returns true if the error should be reported to the user and execution continued
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RecordError::UnknownDepartment(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RecordError {
    fn from(err: std::io::Error) -> Self {
        RecordError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RecordError {
    fn from(err: toml::de::Error) -> Self {
        RecordError::Configuration(format!("TOML parse error: {err}"))
    }
}
