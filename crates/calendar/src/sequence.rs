//! Inclusive daily sequence generation and span arithmetic.

use chrono::{Days, NaiveDate};

/// Generates the complete daily sequence from `start` to `end`, inclusive.
///
/// This is the template axis onto which irregular observations are joined:
/// one entry per calendar day, leap days included. Returns an empty vector
/// when `start > end`.
///
/// # Example
///
/// ```
/// use demeter_calendar::daily_sequence;
/// let start = chrono::NaiveDate::from_ymd_opt(2023, 4, 29).unwrap();
/// let end = chrono::NaiveDate::from_ymd_opt(2023, 5, 2).unwrap();
/// let days = daily_sequence(start, end);
/// assert_eq!(days.len(), 4); // Apr 29, Apr 30, May 1, May 2
/// ```
pub fn daily_sequence(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let n = span_days(start, end) as usize + 1;
    let mut dates = Vec::with_capacity(n);
    let mut current = start;
    while current <= end {
        dates.push(current);
        current = current + Days::new(1);
    }
    dates
}

/// Number of whole days from `start` to `end`.
///
/// Negative when `end` precedes `start`; zero for equal dates.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Position of `date` on a daily axis anchored at `origin`.
///
/// Equivalent to `span_days(origin, date)`; named separately because it is
/// used as an array index when joining observations onto the template axis.
pub fn day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    span_days(origin, date)
}
