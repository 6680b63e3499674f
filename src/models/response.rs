//! Provider response types.

use super::LocalityRecord;
use crate::error::{ResolutionError, ResolutionResult};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Key spellings accepted for the same field, canonical spelling first.
const DOCUMENT_KEYS: &[(&str, &str)] = &[("country_abbreviation", "country abbreviation")];
const PLACE_KEYS: &[(&str, &str)] = &[
    ("place_name", "place name"),
    ("state_abbreviation", "state abbreviation"),
];

/// Drop the alternate spelling of a key when the canonical one is present.
fn drop_shadowed_keys(object: &mut Map<String, Value>, keys: &[(&str, &str)]) {
    for (canonical, alternate) in keys {
        if object.contains_key(*canonical) {
            object.remove(*alternate);
        }
    }
}

/// The unparsed body returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProviderResponse(String);

impl RawProviderResponse {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for RawProviderResponse {
    fn from(body: String) -> Self {
        Self(body)
    }
}

impl From<&str> for RawProviderResponse {
    fn from(body: &str) -> Self {
        Self(body.to_string())
    }
}

/// Treat an explicit `null` list the same as an absent one.
fn deserialize_places<'de, D>(deserializer: D) -> Result<Vec<LocalityRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<LocalityRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The structured provider document.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    /// Country of every place in the document (API field: "country abbreviation")
    #[serde(default, alias = "country abbreviation")]
    pub country_abbreviation: Option<String>,

    #[serde(default, deserialize_with = "deserialize_places")]
    pub places: Vec<LocalityRecord>,
}

impl ProviderResponse {
    /// Parse a provider body.
    ///
    /// The document and every place entry must be JSON objects; serde would
    /// otherwise accept arrays positionally. When both spellings of a key are
    /// present the underscore one wins.
    pub fn parse(body: &str) -> ResolutionResult<Self> {
        let mut value: Value = serde_json::from_str(body)?;

        let document = value.as_object_mut().ok_or_else(|| {
            ResolutionError::ParseFailure("expected a JSON object at the top level".to_string())
        })?;
        drop_shadowed_keys(document, DOCUMENT_KEYS);

        if let Some(Value::Array(places)) = document.get_mut("places") {
            for place in places.iter_mut() {
                let place = place.as_object_mut().ok_or_else(|| {
                    ResolutionError::ParseFailure(
                        "expected every place entry to be a JSON object".to_string(),
                    )
                })?;
                drop_shadowed_keys(place, PLACE_KEYS);
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// The country abbreviation, if present and non-empty.
    pub fn country(&self) -> Option<&str> {
        self.country_abbreviation
            .as_deref()
            .filter(|country| !country.is_empty())
    }

    /// Consume the document, stamping each place with the document's country.
    pub fn into_records(self) -> Vec<LocalityRecord> {
        let country = self.country_abbreviation.unwrap_or_default();
        self.places
            .into_iter()
            .map(|mut place| {
                place.country_abbreviation = country.clone();
                place
            })
            .collect()
    }
}
