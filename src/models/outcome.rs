//! Resolution outcome handed back to callers.

use super::LocalityRecord;
use crate::error::{ErrorKind, ResolutionError};
use serde::Serialize;

/// The result of one postal code submission.
///
/// Exactly one variant applies, so "matched" and "different country" can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// The resolved country equals the expected reference country.
    Matched { records: Vec<LocalityRecord> },

    /// The resolved country differs from the expected one.
    CountryMismatch {
        records: Vec<LocalityRecord>,
        found_country: String,
    },

    /// Lookup or parsing failed.
    Failed { reason: ResolutionError },
}

impl ResolutionOutcome {
    pub fn failed(reason: impl Into<ResolutionError>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn is_country_mismatch(&self) -> bool {
        matches!(self, Self::CountryMismatch { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Resolved records; empty for `Failed`.
    pub fn records(&self) -> &[LocalityRecord] {
        match self {
            Self::Matched { records } | Self::CountryMismatch { records, .. } => {
                records.as_slice()
            }
            Self::Failed { .. } => &[],
        }
    }

    /// The unexpected country, for `CountryMismatch` only.
    pub fn found_country(&self) -> Option<&str> {
        match self {
            Self::CountryMismatch { found_country, .. } => Some(found_country.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ResolutionError> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(ResolutionError::kind)
    }
}
