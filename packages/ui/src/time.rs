//! Timestamp formatting for feed and profile display.
//!
//! Values render in the offset they carry; the server emits UTC, so rendered
//! output is identical on the server and in the browser.

use chrono::DateTime;

/// "Aug 24, 2026, 3:05 PM" from an RFC 3339 timestamp. Unparseable input is
/// returned as-is.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%b %-d, %Y, %-I:%M %p").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// "Aug 24, 2026" for profile join dates.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_full_timestamps() {
        assert_eq!(
            format_timestamp("2026-08-24T15:05:00+00:00"),
            "Aug 24, 2026, 3:05 PM"
        );
        assert_eq!(
            format_timestamp("2026-01-02T09:07:30+00:00"),
            "Jan 2, 2026, 9:07 AM"
        );
    }

    #[test]
    fn test_formats_join_dates() {
        assert_eq!(format_date("2026-08-24T15:05:00+00:00"), "Aug 24, 2026");
    }

    #[test]
    fn test_unparseable_input_is_returned_verbatim() {
        assert_eq!(format_timestamp("not a timestamp"), "not a timestamp");
        assert_eq!(format_date(""), "");
    }
}
