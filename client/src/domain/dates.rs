//! Lenient parsing for the date strings the API emits.
//!
//! The upstream API has emitted several different date formats over time
//! (zoned timestamps, naive timestamps, bare dates, timestamps with a
//! literal `Z` suffix). Rather than reject a record over a bad timestamp,
//! parsing is an ordered chain of attempts with a guaranteed fallback, so
//! the result is total over all string inputs.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Run the fallback chain without the final today-fallback.
///
/// Attempts in order, first success wins:
/// 1. date-time with zone offset (RFC 3339), taking the date in that offset
/// 2. date-time without a zone
/// 3. bare calendar date
/// 4. `yyyy-MM-ddTHH:mm:ss.SSSZ` with a literal trailing `Z`
/// 5. `yyyy-MM-ddTHH:mm:ssZ` with a literal trailing `Z`
/// 6. everything before the first `T`, as a bare calendar date
pub(crate) fn try_parse(input: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = input.parse::<NaiveDateTime>() {
        return Some(parsed.date());
    }
    if let Ok(parsed) = input.parse::<NaiveDate>() {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.3fZ") {
        return Some(parsed.date());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%SZ") {
        return Some(parsed.date());
    }
    if let Some((prefix, _)) = input.split_once('T') {
        if let Ok(parsed) = prefix.parse::<NaiveDate>() {
            return Some(parsed);
        }
    }
    None
}

/// Normalize a wire-format date string into a calendar date.
///
/// Never fails: anything the chain cannot parse (an empty string included)
/// degrades to today's local date, with a diagnostic log as the only trace.
pub fn normalize(input: &str) -> NaiveDate {
    try_parse(input).unwrap_or_else(|| {
        warn!(input = %input, "unparsable date from server, falling back to today");
        Local::now().date_naive()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zoned_timestamp_keeps_date_in_original_offset() {
        assert_eq!(normalize("2025-08-10T14:30:00+05:30"), date(2025, 8, 10));
        // 23:30 at -03:00 is already the 11th in UTC, but the server meant the 10th.
        assert_eq!(normalize("2025-08-10T23:30:00-03:00"), date(2025, 8, 10));
    }

    #[test]
    fn test_utc_timestamp_with_millis() {
        assert_eq!(normalize("2025-08-10T14:30:00.000Z"), date(2025, 8, 10));
    }

    #[test]
    fn test_naive_timestamp() {
        assert_eq!(normalize("2025-08-10T14:30:00"), date(2025, 8, 10));
    }

    #[test]
    fn test_bare_calendar_date() {
        assert_eq!(normalize("2025-08-10"), date(2025, 8, 10));
        assert_eq!(normalize("1999-12-31"), date(1999, 12, 31));
    }

    #[test]
    fn test_truncates_at_t_when_time_part_is_garbage() {
        assert_eq!(normalize("2025-08-10Tnot-a-time"), date(2025, 8, 10));
    }

    #[test]
    fn test_chain_rejects_malformed_input() {
        assert!(try_parse("").is_none());
        assert!(try_parse("yesterday").is_none());
        assert!(try_parse("10/08/2025").is_none());
        assert!(try_parse("garbageT2025-08-10").is_none());
    }

    #[test]
    fn test_empty_string_falls_back_to_today() {
        assert_eq!(normalize(""), Local::now().date_naive());
    }

    #[test]
    fn test_garbage_falls_back_to_today() {
        assert_eq!(normalize("not a date at all"), Local::now().date_naive());
    }
}
