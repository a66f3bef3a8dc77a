//! Timestamp parsing for the accepted station formats.

use chrono::NaiveDateTime;

use crate::error::TimeseriesError;

/// Timestamp formats accepted by [`parse_timestamp`], tried in order.
pub const ACCEPTED_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%m/%d/%Y %H:%M"];

/// Parses a station timestamp string.
///
/// The accepted formats are tried in the order listed in
/// [`ACCEPTED_TIMESTAMP_FORMATS`]; the first match wins.
///
/// # Errors
///
/// Returns [`TimeseriesError::TimestampParse`] if the input matches none of
/// the accepted formats.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, TimeseriesError> {
    for format in ACCEPTED_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }
    Err(TimeseriesError::TimestampParse {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn iso_format() {
        let t = parse_timestamp("2019-05-01 06:45").unwrap();
        assert_eq!(t.year(), 2019);
        assert_eq!(t.month(), 5);
        assert_eq!(t.day(), 1);
        assert_eq!(t.hour(), 6);
        assert_eq!(t.minute(), 45);
    }

    #[test]
    fn us_format() {
        let t = parse_timestamp("05/01/2019 06:45").unwrap();
        assert_eq!(t, parse_timestamp("2019-05-01 06:45").unwrap());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = parse_timestamp("2019-05-01T06:45:00Z").unwrap_err();
        assert!(matches!(err, TimeseriesError::TimestampParse { .. }));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not a time").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn rejects_seconds_suffix() {
        // The accepted formats stop at minutes.
        assert!(parse_timestamp("2019-05-01 06:45:30").is_err());
    }
}
