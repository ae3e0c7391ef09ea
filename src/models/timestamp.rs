use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

// Artifacts written by older versions of the pipeline carry timestamps without
// an offset ("2024-01-15T10:00:00.123456"); those are read as UTC.

/// Parse a local time such as "2024-01-15T10:00", with optional seconds and fraction
pub fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Parse RFC 3339, falling back to an offset-less ISO time taken as UTC
pub fn parse_utc(s: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => parse_naive(s).map(|naive| naive.and_utc()),
    }
}

pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_utc(&s).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", s)))
}

pub fn deserialize_utc_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_utc(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", s))),
        None => Ok(None),
    }
}

pub fn deserialize_naive_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_naive(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid local time '{}'", s))),
        None => Ok(None),
    }
}
