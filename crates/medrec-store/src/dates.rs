//! Visit date parsing for ordering and calendar queries.

use chrono::{NaiveDate, NaiveDateTime};

/// Parses a visit date.
///
/// ISO dates are expected; a few common spreadsheet layouts and ISO
/// timestamps are accepted too. Anything else yields `None`, which orders
/// before every real date.
pub fn parse_visit_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y", // US: 01/15/2024
        "%d-%b-%Y", // 15-Jan-2024
        "%b %d, %Y",
    ];
    for fmt in &formats {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }

    let datetime_formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
    for fmt in &datetime_formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(datetime.date());
        }
    }

    // Timestamps with fractions or offsets: the date part is enough.
    if value.len() > 10 && value.as_bytes()[10] == b'T' {
        return value
            .get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok());
    }
    None
}
