//! Result classification.
//!
//! Turns a raw provider body into a [`ResolutionOutcome`] by comparing the
//! resolved country against an expected reference country. Pure and
//! synchronous: the same input always yields the same outcome.

use crate::error::ResolutionError;
use crate::models::{ProviderResponse, RawProviderResponse, ResolutionOutcome};

/// Name of the field every provider document must carry.
pub const COUNTRY_FIELD: &str = "country_abbreviation";

/// Classify a raw provider response against `expected_country`.
///
/// Country comparison is exact and case-sensitive. An empty `places` list is
/// valid and yields an outcome with no records.
pub fn classify(raw: &RawProviderResponse, expected_country: &str) -> ResolutionOutcome {
    let document = match ProviderResponse::parse(raw.as_str()) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Provider response could not be parsed: {}", e);
            return ResolutionOutcome::failed(e);
        }
    };

    let found_country = match document.country() {
        Some(country) => country.to_string(),
        None => {
            tracing::warn!("Provider response has no {}", COUNTRY_FIELD);
            return ResolutionOutcome::failed(ResolutionError::MissingField(
                COUNTRY_FIELD.to_string(),
            ));
        }
    };

    let records = document.into_records();

    if found_country == expected_country {
        tracing::debug!(
            "Resolved {} place(s) in expected country {}",
            records.len(),
            expected_country
        );
        ResolutionOutcome::Matched { records }
    } else {
        tracing::info!(
            "Resolved country {} differs from expected {}",
            found_country,
            expected_country
        );
        ResolutionOutcome::CountryMismatch {
            records,
            found_country,
        }
    }
}
