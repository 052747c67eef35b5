//! Permissive order-date parsing.
//!
//! Raw exports arrive with whatever date format the upstream system used,
//! so parsing tries a list of common formats rather than a single one.
//! US month-first forms are tried before day-first forms, matching the
//! lenient parser the legacy job relied on.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 12] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",  // US: 01/15/2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%d.%m.%Y",  // German: 15.01.2024
    "%Y%m%d",    // Compact: 20240115
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Parses a date string permissively, returning None when no known
/// format matches. Datetime inputs are accepted and truncated to the
/// date, since order dates carry no time component.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::parse_date;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_common_formats() {
        assert_eq!(parse_date("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("2024/01/15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("15-Jan-2024"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2024"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date("20240115"), Some(date(2024, 1, 15)));
    }

    #[test]
    fn month_first_wins_for_ambiguous_slashes() {
        // 01/02/2024 reads as January 2nd, as the lenient legacy parser did.
        assert_eq!(parse_date("01/02/2024"), Some(date(2024, 1, 2)));
        // Day > 12 disambiguates to day-first.
        assert_eq!(parse_date("15/01/2024"), Some(date(2024, 1, 15)));
    }

    #[test]
    fn truncates_datetimes_to_date() {
        assert_eq!(
            parse_date("2024-01-15T10:30:45"),
            Some(date(2024, 1, 15))
        );
        assert_eq!(parse_date("2024-01-15 10:30"), Some(date(2024, 1, 15)));
    }

    #[test]
    fn rejects_unparseable_values() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }
}
