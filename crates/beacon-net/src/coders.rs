//! ISO-8601 date decoding for API payloads.
//!
//! The backend emits timestamps both with and without fractional
//! seconds; [`parse_date`] accepts either, and [`iso8601`] plugs the
//! same rule into serde so JSON payloads decode dates uniformly.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The string was not a valid ISO-8601 timestamp.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("date can't be parsed: {0}")]
pub struct DateParseError(pub String);

/// Parse an ISO-8601 / RFC 3339 timestamp, with or without fractional
/// seconds, into a UTC instant.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| DateParseError(value.to_owned()))
}

/// Serde adapter for [`parse_date`].
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Event {
///     #[serde(deserialize_with = "beacon_net::coders::iso8601::deserialize")]
///     occurred_at: DateTime<Utc>,
/// }
/// ```
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_date(&value).map_err(serde::de::Error::custom)
    }
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "super::iso8601::deserialize")]
        date: DateTime<Utc>,
    }

    #[test]
    fn date_with_milliseconds() {
        let payload: Payload =
            serde_json::from_str(r#"{"date": "2022-04-27T08:14:56.217000+00:00"}"#).unwrap();

        assert_eq!(payload.date.timestamp_millis(), 1_651_047_296_217);
    }

    #[test]
    fn date_without_milliseconds() {
        let payload: Payload =
            serde_json::from_str(r#"{"date": "2022-04-27T08:14:56+00:00"}"#).unwrap();

        assert_eq!(payload.date.timestamp(), 1_651_047_296);
        assert_eq!(payload.date.timestamp_subsec_millis(), 0);
    }

    #[test]
    fn zulu_offset_is_accepted() {
        let date = parse_date("2022-04-27T08:14:56Z").unwrap();

        assert_eq!(date.timestamp(), 1_651_047_296);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_date("27/04/2022").unwrap_err();

        assert_eq!(err, DateParseError("27/04/2022".into()));
    }
}
