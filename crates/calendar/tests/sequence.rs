use chrono::NaiveDate;
use demeter_calendar::{daily_sequence, parse_date, span_days};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn six_month_window_is_calendar_complete() {
    // The default analysis window from the acquisition side: Apr 1 - Sep 30.
    let dates = daily_sequence(d(2023, 4, 1), d(2023, 9, 30));
    assert_eq!(dates.len(), 183);

    // Strictly increasing by exactly one day, no duplicates.
    for pair in dates.windows(2) {
        assert_eq!(span_days(pair[0], pair[1]), 1);
    }

    assert_eq!(dates[0], d(2023, 4, 1));
    assert_eq!(dates[182], d(2023, 9, 30));
}

#[test]
fn year_boundary() {
    let dates = daily_sequence(d(2022, 12, 30), d(2023, 1, 2));
    assert_eq!(
        dates,
        vec![d(2022, 12, 30), d(2022, 12, 31), d(2023, 1, 1), d(2023, 1, 2)]
    );
}

#[test]
fn leap_year_window() {
    // 2024 is a leap year: Feb spans 29 days.
    let dates = daily_sequence(d(2024, 2, 1), d(2024, 2, 29));
    assert_eq!(dates.len(), 29);
}

#[test]
fn parsed_endpoints_round_trip() {
    let start = parse_date("2023-04-01").unwrap();
    let end = parse_date("2023-04-10").unwrap();
    let dates = daily_sequence(start, end);
    assert_eq!(dates.len(), 10);
    assert_eq!(demeter_calendar::format_date(dates[9]), "2023-04-10");
}
