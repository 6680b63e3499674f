//! Locality record: one place entry resolved for a postal code.

use serde::{Deserialize, Deserializer, Serialize};

/// Coordinates arrive either as JSON numbers or as numeric strings
/// (`"-118.4065"`), depending on the provider.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

/// Custom deserializer accepting numeric and string-encoded coordinates.
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(value) => Ok(value),
        Coordinate::Text(text) => text.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("invalid coordinate: {:?}", text))
        }),
    }
}

/// One place resolved for a postal code.
///
/// Field names follow the provider document. The space-separated spellings
/// some providers emit (`"place name"`, `"state abbreviation"`) are accepted
/// as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalityRecord {
    /// Locality name (API field: place_name / "place name")
    #[serde(alias = "place name")]
    pub place_name: String,

    /// Full state or region name
    pub state: String,

    /// State abbreviation (API field: state_abbreviation / "state abbreviation")
    #[serde(alias = "state abbreviation")]
    pub state_abbreviation: String,

    #[serde(deserialize_with = "deserialize_coordinate")]
    pub longitude: f64,

    #[serde(deserialize_with = "deserialize_coordinate")]
    pub latitude: f64,

    /// Country of the enclosing document; place entries do not carry it
    #[serde(default)]
    pub country_abbreviation: String,
}

impl LocalityRecord {
    /// Create a new LocalityRecord.
    pub fn new(
        place_name: impl Into<String>,
        state: impl Into<String>,
        state_abbreviation: impl Into<String>,
        longitude: f64,
        latitude: f64,
        country_abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            place_name: place_name.into(),
            state: state.into(),
            state_abbreviation: state_abbreviation.into(),
            longitude,
            latitude,
            country_abbreviation: country_abbreviation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locality_deserialization_numeric() {
        let json = r#"{
            "place_name": "Beverly Hills",
            "state": "California",
            "state_abbreviation": "CA",
            "longitude": -118.4,
            "latitude": 34.09
        }"#;

        let record: LocalityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.place_name, "Beverly Hills");
        assert_eq!(record.state_abbreviation, "CA");
        assert_eq!(record.longitude, -118.4);
        assert_eq!(record.latitude, 34.09);
        assert!(record.country_abbreviation.is_empty());
    }

    #[test]
    fn test_locality_deserialization_spaced_keys_and_string_coordinates() {
        let json = r#"{
            "place name": "Beverly Hills",
            "state": "California",
            "state abbreviation": "CA",
            "longitude": "-118.4065",
            "latitude": "34.0901"
        }"#;

        let record: LocalityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.place_name, "Beverly Hills");
        assert_eq!(record.longitude, -118.4065);
        assert_eq!(record.latitude, 34.0901);
    }

    #[test]
    fn test_locality_rejects_non_numeric_coordinate() {
        let json = r#"{
            "place_name": "Nowhere",
            "state": "Nowhere",
            "state_abbreviation": "NW",
            "longitude": "west-ish",
            "latitude": 1.0
        }"#;

        let result: Result<LocalityRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_locality_serialization() {
        let record = LocalityRecord::new("Beverly Hills", "California", "CA", -118.4, 34.09, "US");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["place_name"], "Beverly Hills");
        assert_eq!(json["country_abbreviation"], "US");
        assert_eq!(json["longitude"], -118.4);
    }
}
