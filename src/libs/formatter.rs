//! Date and time parsing helpers for command-line arguments.
//!
//! All commands accept the same two shapes: `YYYY-MM-DD HH:MM` for an
//! exact instant and `YYYY-MM-DD` for a date, which resolves to 09:00
//! local time. Parsing failures surface as argument errors, never as
//! panics.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Hour used when an argument carries only a date.
const DEFAULT_HOUR: u32 = 9;

/// Parses a `YYYY-MM-DD HH:MM` or `YYYY-MM-DD` argument into a local
/// timestamp.
pub fn parse_datetime_arg(value: &str) -> Result<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).or_else(|_| {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(|date| date.and_time(NaiveTime::from_hms_opt(DEFAULT_HOUR, 0, 0).unwrap()))
    });
    let naive = match naive {
        Ok(naive) => naive,
        Err(_) => return Err(msg_error_anyhow!(Message::InvalidDateFormat(value.to_string()))),
    };
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidDateFormat(value.to_string())))
}

/// Parses a `YYYY-MM-DD` argument.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| msg_error_anyhow!(Message::InvalidDateFormat(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_date_with_time() {
        let parsed = parse_datetime_arg("2025-06-01 14:30").unwrap();
        assert_eq!(parsed.hour(), 14);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn bare_date_defaults_to_morning() {
        let parsed = parse_datetime_arg("2025-06-01").unwrap();
        assert_eq!(parsed.hour(), 9);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime_arg("next tuesday").is_err());
        assert!(parse_date_arg("01/06/2025").is_err());
    }
}
