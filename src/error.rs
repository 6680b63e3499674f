//! Error types for the postal code resolver.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::ValidationError;

/// Message used when a transport failure carries no provider message.
pub const GENERIC_TRANSPORT_MESSAGE: &str = "An error occurred";

/// Fieldless discriminant of [`ResolutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    TransportFailure,
    ParseFailure,
    MissingField,
    Cancelled,
}

/// Errors that can occur while resolving a postal code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Postal code was empty after trimming
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network or provider failure
    #[error("Transport failure: {message}")]
    TransportFailure {
        /// HTTP status, when the provider answered at all
        status: Option<u16>,
        message: String,
    },

    /// Provider body was not the expected JSON document
    #[error("Failed to parse provider response: {0}")]
    ParseFailure(String),

    /// A required field was absent or empty
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Caller cancelled the lookup before it completed
    #[error("Request cancelled")]
    Cancelled,
}

impl ResolutionError {
    /// Transport failure without an HTTP status.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            status: None,
            message: message.into(),
        }
    }

    /// The kind of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::TransportFailure { .. } => ErrorKind::TransportFailure,
            Self::ParseFailure(_) => ErrorKind::ParseFailure,
            Self::MissingField(_) => ErrorKind::MissingField,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }
}

impl From<ValidationError> for ResolutionError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for ResolutionError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailure(err.to_string())
    }
}

// Rendered as {"kind": ..., "message": ...} so hosts get a stable shape
impl Serialize for ResolutionError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ResolutionError", 2)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ResolutionError
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
