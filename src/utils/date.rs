//! UTC dates for content entries.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serializer;

/// Midnight UTC of the given calendar day, `None` if the day does not exist.
pub fn utc_midnight(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

/// Parse exactly `YYYY-MM-DD` into midnight UTC.
pub fn parse_ymd(s: &str) -> Option<DateTime<Utc>> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = parse_u16(&bytes[0..4])?;
    let month = parse_u8(&bytes[5..7])?;
    let day = parse_u8(&bytes[8..10])?;
    utc_midnight(year.into(), month.into(), day.into())
}

/// Format as RFC 3339 with a `Z` suffix, e.g. `2023-11-02T00:00:00Z`.
pub fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Serde helper for `DateTime<Utc>` fields.
pub fn serialize_rfc3339<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_rfc3339(dt))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_midnight() {
        let dt = utc_midnight(2023, 11, 2).unwrap();
        assert_eq!(to_rfc3339(&dt), "2023-11-02T00:00:00Z");
    }

    #[test]
    fn test_utc_midnight_invalid_day() {
        assert!(utc_midnight(2023, 2, 29).is_none());
        assert!(utc_midnight(2023, 4, 31).is_none());
        assert!(utc_midnight(2023, 13, 1).is_none());
        assert!(utc_midnight(2024, 2, 29).is_some());
    }

    #[test]
    fn test_parse_ymd() {
        let dt = parse_ymd("2024-01-15").unwrap();
        assert_eq!(to_rfc3339(&dt), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn test_parse_ymd_rejects_other_shapes() {
        assert!(parse_ymd("January 15, 2024").is_none());
        assert!(parse_ymd("2024-1-15").is_none());
        assert!(parse_ymd("2024-01-15T10:00:00Z").is_none());
        assert!(parse_ymd("2024/01/15").is_none());
        assert!(parse_ymd("2024-02-30").is_none());
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_u8(b"07"), Some(7));
        assert_eq!(parse_u8(b"7a"), None);
        assert_eq!(parse_u16(b"2024"), Some(2024));
        assert_eq!(parse_u16(b"20x4"), None);
    }
}
