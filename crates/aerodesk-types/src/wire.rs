//! Lenient field decoders for backend payloads.
//!
//! The data service passes database values through untouched, so a field
//! may come back `null` where a default is meant, and timestamps may or may
//! not carry a UTC offset depending on how the row was written.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses `2024-01-15T18:30:00` as well as offset forms such as
/// `2024-01-15T18:30:00+00:00` or `...Z`. Offset forms are normalised to UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp `{raw}`")))
}

pub(crate) fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp `{raw}`"))),
    }
}

/// `null` reads as `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}
