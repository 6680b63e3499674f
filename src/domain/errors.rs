//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The postal code is empty after trimming.
    EmptyPostalCode,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPostalCode => write!(f, "Postal code cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
