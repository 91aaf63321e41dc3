//! Conversion of human-entered date strings to epoch seconds.
//!
//! Inputs without an explicit offset are read as UTC. Anything that does not
//! match one of the accepted layouts is an [`Error::InvalidDate`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::Error;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `input` into seconds since the Unix epoch.
///
/// Accepted forms: RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DD` (midnight UTC)
/// and `@<seconds>`.
pub fn parse_epoch_seconds(input: &str) -> Result<i64, Error> {
    let trimmed = input.trim();

    if let Some(raw) = trimmed.strip_prefix('@') {
        return raw
            .parse::<i64>()
            .map_err(|_| Error::InvalidDate(input.to_string()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.timestamp());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.and_utc().timestamp());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp());
        }
    }

    Err(Error::InvalidDate(input.to_string()))
}
