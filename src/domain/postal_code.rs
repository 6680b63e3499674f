//! PostalCode value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A trimmed, non-empty postal code.
///
/// Surrounding whitespace is stripped at construction time, so the value
/// handed to the provider is exactly what the user meant to type.
///
/// # Example
///
/// ```
/// use postal_resolver::domain::PostalCode;
///
/// let code = PostalCode::new("  90210 ").unwrap();
/// assert_eq!(code.as_str(), "90210");
/// assert!(PostalCode::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Create a new PostalCode from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPostalCode` if the input is empty or
    /// whitespace-only.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPostalCode);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the postal code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PostalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PostalCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
