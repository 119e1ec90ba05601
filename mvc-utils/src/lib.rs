//! Shared utility functions for MVC crates.

/// Date and time helpers for the collision dataset.
pub mod dates {
    use crate::error::DateError;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    /// Date formats seen in the `CRASH DATE` column, tried in order.
    ///
    /// The CSV export uses `MM/DD/YYYY`; the SODA resource endpoint
    /// emits ISO dates with a midnight time suffix.
    pub const CRASH_DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

    /// Time formats seen in the `CRASH TIME` column, tried in order.
    pub const CRASH_TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

    /// Parse a `CRASH DATE` value.
    pub fn parse_crash_date(s: &str) -> Result<NaiveDate, DateError> {
        let trimmed = s.trim();
        // "2021-09-11T00:00:00.000" -> "2021-09-11"
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        CRASH_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
            .ok_or_else(|| DateError(format!("unrecognized crash date `{}`", s)))
    }

    /// Parse a `CRASH TIME` value such as `2:39` or `14:05:00`.
    pub fn parse_crash_time(s: &str) -> Result<NaiveTime, DateError> {
        let trimmed = s.trim();
        CRASH_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
            .ok_or_else(|| DateError(format!("unrecognized crash time `{}`", s)))
    }

    /// Merge the separate date and time columns into one timestamp.
    pub fn merge_crash_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, DateError> {
        let date = parse_crash_date(date)?;
        let time = parse_crash_time(time)?;
        Ok(date.and_time(time))
    }

    /// The hour following `hour`, wrapping at midnight.
    pub fn next_hour(hour: u8) -> u8 {
        (hour % 24 + 1) % 24
    }

    /// Human label for a one-hour window, e.g. `between 23:00 and 0:00`.
    pub fn hour_window(hour: u8) -> String {
        format!("between {}:00 and {}:00", hour, next_hour(hour))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Datelike, Timelike};

        #[test]
        fn test_parse_crash_date_formats() {
            let us = parse_crash_date("09/11/2021").unwrap();
            assert_eq!((us.year(), us.month(), us.day()), (2021, 9, 11));

            let iso = parse_crash_date("2021-09-11T00:00:00.000").unwrap();
            assert_eq!(us, iso);

            assert!(parse_crash_date("11th of September").is_err());
        }

        #[test]
        fn test_parse_crash_time_without_leading_zero() {
            let t = parse_crash_time("2:39").unwrap();
            assert_eq!((t.hour(), t.minute()), (2, 39));

            let t = parse_crash_time(" 14:05:30 ").unwrap();
            assert_eq!((t.hour(), t.minute(), t.second()), (14, 5, 30));
        }

        #[test]
        fn test_merge_crash_timestamp() {
            let ts = merge_crash_timestamp("03/26/2022", "11:45").unwrap();
            assert_eq!(ts.to_string(), "2022-03-26 11:45:00");

            let err = merge_crash_timestamp("03/26/2022", "noon").unwrap_err();
            assert!(err.to_string().contains("noon"));
        }

        #[test]
        fn test_hour_window_wraps() {
            assert_eq!(next_hour(23), 0);
            assert_eq!(hour_window(9), "between 9:00 and 10:00");
            assert_eq!(hour_window(23), "between 23:00 and 0:00");
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
