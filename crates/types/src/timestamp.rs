//! ISO-8601 timestamps that round-trip exactly as received.
//!
//! Service payloads mix offset-aware instants (`2023-01-01T00:00:00Z`) with
//! timezone-naive values (`2023-01-01T00:00:00`). Both are kept in their
//! original form; nothing is converted to UTC.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Timestamp carried on the wire as ISO-8601 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Instant with an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Date-time without any timezone information.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Returns true when the timestamp carries an offset.
    pub fn is_zoned(&self) -> bool {
        matches!(self, Timestamp::Zoned(_))
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Naive(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Zoned(date_time) => {
                let use_z = date_time.offset().local_minus_utc() == 0;
                f.write_str(&date_time.to_rfc3339_opts(SecondsFormat::AutoSi, use_z))
            }
            Timestamp::Naive(date_time) => write!(f, "{}", date_time.format(NAIVE_FORMAT)),
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Timestamp::Zoned(date_time));
        }
        NaiveDateTime::parse_from_str(trimmed, NAIVE_FORMAT)
            .map(Timestamp::Naive)
            .map_err(|_| TimestampParseError { input: s.to_string() })
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Returned when text is not a recognizable ISO-8601 date-time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampParseError {
    input: String,
}

impl TimestampParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for TimestampParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ISO-8601 timestamp '{}'", self.input)
    }
}

impl Error for TimestampParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_instant_keeps_z_suffix() {
        let timestamp: Timestamp = "2023-01-01T00:00:00Z".parse().expect("parse utc");
        assert!(timestamp.is_zoned());
        assert_eq!(timestamp.to_string(), "2023-01-01T00:00:00Z");
    }

    #[test]
    fn offset_is_preserved() {
        let timestamp: Timestamp = "2023-06-15T14:22:30+02:00".parse().expect("parse offset");
        assert_eq!(timestamp.to_string(), "2023-06-15T14:22:30+02:00");
    }

    #[test]
    fn fractional_seconds_survive() {
        let timestamp: Timestamp = "2023-06-15T14:22:30.123Z".parse().expect("parse millis");
        assert_eq!(timestamp.to_string(), "2023-06-15T14:22:30.123Z");
    }

    #[test]
    fn naive_value_stays_naive() {
        let timestamp: Timestamp = "2023-12-25T10:30:00".parse().expect("parse naive");
        assert!(!timestamp.is_zoned());
        assert_eq!(timestamp.to_string(), "2023-12-25T10:30:00");

        let with_fraction: Timestamp = "2023-12-25T10:30:00.250".parse().expect("parse naive millis");
        assert_eq!(with_fraction.to_string(), "2023-12-25T10:30:00.250");
    }

    #[test]
    fn equal_instants_in_different_offsets_compare_equal() {
        let utc: Timestamp = "2023-01-01T00:00:00Z".parse().unwrap();
        let shifted: Timestamp = "2023-01-01T02:00:00+02:00".parse().unwrap();
        assert_eq!(utc, shifted);
    }

    #[test]
    fn rejects_garbage() {
        let error = "yesterday".parse::<Timestamp>().unwrap_err();
        assert_eq!(error.input(), "yesterday");
        assert!(error.to_string().contains("yesterday"));
        assert!("2023-13-45T00:00:00Z".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
    }

    #[test]
    fn serde_uses_iso_text() {
        let timestamp: Timestamp = serde_json::from_str("\"2023-01-01T00:00:00Z\"").expect("deserialize");
        assert_eq!(serde_json::to_string(&timestamp).unwrap(), "\"2023-01-01T00:00:00Z\"");
        assert!(serde_json::from_str::<Timestamp>("42").is_err());
    }
}
