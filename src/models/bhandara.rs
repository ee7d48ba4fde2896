//! Bhandara model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::Coordinates;

/// A bhandara as stored by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bhandara {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer: String,
    #[serde(default)]
    pub food_items: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub attendees: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Bhandara {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Payload of the creation endpoint. Built only from a validated draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBhandaraRequest {
    pub title: String,
    pub location: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub end_time: DateTime<Utc>,
    pub organizer: String,
    pub food_items: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// ISO-8601 UTC timestamps with millisecond precision, `2026-10-19T04:30:00.000Z`
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
