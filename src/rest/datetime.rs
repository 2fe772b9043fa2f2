//! Serde helpers for the API's zone-less timestamps.
//!
//! The API writes moments as `2024-03-01 12:30:00.000` (Moscow time, no
//! offset). Reading also accepts values without the fractional part and the
//! ISO `T` separator.
//!
//! ```rust,ignore
//! #[serde(default, with = "crate::rest::datetime::option", skip_serializing_if = "Option::is_none")]
//! pub moment: Option<NaiveDateTime>,
//! ```

use chrono::NaiveDateTime;

/// Format used when writing timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp in any of the layouts the API produces.
#[must_use]
pub fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Formats a timestamp the way the API expects it.
#[must_use]
pub fn format(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// `with` module for `Option<NaiveDateTime>` fields.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes `Some` as an API timestamp and `None` as `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(moment) => serializer.serialize_str(&super::format(moment)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional API timestamp.
    ///
    /// # Errors
    ///
    /// Fails when the string is not a recognized timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(text) if text.trim().is_empty() => Ok(None),
            Some(text) => super::parse(&text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{text}'"))),
        }
    }
}
