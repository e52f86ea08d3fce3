//! ISO-8601 calendar-date parsing and formatting.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Parses a `YYYY-MM-DD` date string.
///
/// This is the only date format accepted at the system boundary; acquisition
/// services and the tabular artifacts both speak it.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the string is not a valid
/// ISO-8601 calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| CalendarError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let date = parse_date("2023-04-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
    }

    #[test]
    fn parse_leap_day() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_invalid_month() {
        let err = parse_date("2023-13-01").unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate { .. }));
        assert!(err.to_string().contains("2023-13-01"));
    }

    #[test]
    fn parse_non_leap_feb_29() {
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn parse_rejects_other_formats() {
        assert!(parse_date("01/04/2023").is_err());
        assert!(parse_date("2023-4-1 12:00").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2023, 9, 30).unwrap();
        assert_eq!(format_date(date), "2023-09-30");
        assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }

    #[test]
    fn format_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(format_date(date), "2023-01-05");
    }
}
