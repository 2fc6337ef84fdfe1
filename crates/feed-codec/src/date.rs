// crates/feed-codec/src/date.rs
//! Conversion between the canonical civil timestamp and Atom's RFC 3339 timestamps
//!
//! The canonical form is `YYYY-MM-DD HH:MM:SS` with no offset. Converting
//! from RFC 3339 keeps the wall-clock time and drops the offset; converting
//! back always produces a UTC (`Z`) timestamp.

use crate::error::{FeedError, FeedResult};
use chrono::{DateTime, NaiveDateTime, SecondsFormat};

/// `strftime` layout of the canonical timestamp
pub const CANONICAL_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

const CANONICAL_NAME: &str = "YYYY-MM-DD HH:MM:SS";
const ZONED_NAME: &str = "RFC 3339";

/// Parses an RFC 3339 timestamp and formats it canonically
pub fn zoned_to_canonical(value: &str) -> FeedResult<String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| format_canonical(dt.naive_local()))
        .map_err(|_| FeedError::InvalidTimestamp {
            value: value.to_string(),
            expected: ZONED_NAME,
        })
}

/// Parses a canonical timestamp and formats it as RFC 3339 in UTC
pub fn canonical_to_zoned(value: &str) -> FeedResult<String> {
    NaiveDateTime::parse_from_str(value, CANONICAL_LAYOUT)
        .map(format_zoned)
        .map_err(|_| FeedError::InvalidTimestamp {
            value: value.to_string(),
            expected: CANONICAL_NAME,
        })
}

/// Like [`zoned_to_canonical`], but an unparseable input yields the epoch
pub fn zoned_to_canonical_lossy(value: &str) -> String {
    zoned_to_canonical(value).unwrap_or_else(|err| {
        log::debug!("{}, using epoch", err);
        format_canonical(NaiveDateTime::default())
    })
}

/// Like [`canonical_to_zoned`], but an unparseable input yields the epoch
pub fn canonical_to_zoned_lossy(value: &str) -> String {
    canonical_to_zoned(value).unwrap_or_else(|err| {
        log::debug!("{}, using epoch", err);
        format_zoned(NaiveDateTime::default())
    })
}

fn format_canonical(dt: NaiveDateTime) -> String {
    dt.format(CANONICAL_LAYOUT).to_string()
}

fn format_zoned(dt: NaiveDateTime) -> String {
    dt.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoned_to_canonical_utc() {
        let canonical = zoned_to_canonical("2024-01-02T03:04:05Z").expect("valid timestamp");
        assert_eq!(canonical, "2024-01-02 03:04:05");
    }

    #[test]
    fn test_zoned_to_canonical_keeps_wall_clock() {
        let canonical =
            zoned_to_canonical("2024-01-02T03:04:05+02:00").expect("valid timestamp");
        assert_eq!(canonical, "2024-01-02 03:04:05");
    }

    #[test]
    fn test_zoned_to_canonical_drops_fraction() {
        let canonical =
            zoned_to_canonical("2024-06-30T23:59:59.750Z").expect("valid timestamp");
        assert_eq!(canonical, "2024-06-30 23:59:59");
    }

    #[test]
    fn test_canonical_to_zoned() {
        let zoned = canonical_to_zoned("2024-01-02 03:04:05").expect("valid timestamp");
        assert_eq!(zoned, "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_round_trip_is_same_instant_in_utc() {
        let original = "2023-11-05T17:45:00Z";
        let canonical = zoned_to_canonical(original).expect("valid timestamp");
        let back = canonical_to_zoned(&canonical).expect("valid timestamp");
        assert_eq!(
            DateTime::parse_from_rfc3339(&back).expect("rfc3339"),
            DateTime::parse_from_rfc3339(original).expect("rfc3339")
        );
    }

    #[test]
    fn test_invalid_inputs_are_errors() {
        assert!(matches!(
            zoned_to_canonical("Mon, 01 Jan 2024 12:00:00 GMT"),
            Err(FeedError::InvalidTimestamp { .. })
        ));
        assert!(matches!(
            canonical_to_zoned("2024-01-02T03:04:05Z"),
            Err(FeedError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn test_lossy_falls_back_to_epoch() {
        assert_eq!(zoned_to_canonical_lossy("garbage"), "1970-01-01 00:00:00");
        assert_eq!(canonical_to_zoned_lossy(""), "1970-01-01T00:00:00Z");
    }
}
