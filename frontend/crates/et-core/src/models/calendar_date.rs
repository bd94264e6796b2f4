//! Serde helpers for calendar dates on the wire.
//!
//! Dates are sent as `YYYY-MM-DD`. The backend is allowed to answer with a
//! full date-time (`2024-03-05T00:00:00`, with or without offset); only the
//! date part is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de};

pub const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Parse a wire date, accepting plain dates and date-times.
pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, WIRE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date_time.date());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|date_time| date_time.date_naive())
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(WIRE_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid calendar date: {raw}")))
}
