//! Lenient datetime parsing for test fixtures.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone as _, Utc};

/// Formats tried for datetimes carrying a UTC offset. A trailing `Z` is
/// rewritten to `+00:00` before these are tried.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Formats tried for datetimes without an offset; these are taken as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raised when a string is not in any of the recognized datetime formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse {input:?} as a datetime")]
pub struct DateTimeParseError {
    input: String,
}

impl DateTimeParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses a datetime string into a UTC datetime.
///
/// Accepts integer Unix timestamps (in seconds), RFC 3339 datetimes with a
/// `Z` or numeric offset, datetimes without an offset (taken as UTC, with
/// either `T` or a space as separator) and bare dates (midnight UTC).
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, DateTimeParseError> {
    let value = value.trim();
    let err = || DateTimeParseError {
        input: value.to_owned(),
    };

    if is_integer(value) {
        let seconds: i64 = value.parse().map_err(|_| err())?;
        return Utc.timestamp_opt(seconds, 0).single().ok_or_else(err);
    }

    let with_offset = match value.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => value.to_owned(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(datetime.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(err)
}

/// Whole seconds since the Unix epoch; sub-second precision is dropped.
pub fn epoch_seconds(datetime: &DateTime<Utc>) -> i64 {
    datetime.timestamp()
}

fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
