//! Tolerant date parsing for the export's string date columns.
//!
//! ISO forms are tried first, then the day-first forms common in the
//! locales these exports come from. An unparseable value only ever drops
//! its row from date-dependent aggregates.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parses a raw cell into a calendar date, `None` when blank or in no
/// recognized format.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Calendar year-month bucket key, `"YYYY-MM"`. Lexicographic order of
/// these keys is chronological order.
#[must_use]
pub fn year_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
