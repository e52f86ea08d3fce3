//! Gap-size threshold boundary behavior.

use chrono::{Days, NaiveDate};
use demeter_gapfill::{GapFillConfig, fill};
use demeter_series::Observation;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn obs(date: NaiveDate, mean: f64) -> Observation {
    Observation::new(date, mean, None, None, None, 5.0).unwrap()
}

/// Two observations with exactly `gap` missing days between them.
fn pair_with_gap(gap: u64, first: f64, second: f64) -> Vec<Observation> {
    let start = d(2023, 4, 1);
    vec![
        obs(start, first),
        obs(start + Days::new(gap + 1), second),
    ]
}

#[test]
fn run_of_exactly_max_gap_days_is_filled() {
    let config = GapFillConfig::new().with_max_gap_days(32);
    let series = fill(&pair_with_gap(32, 0.3, 0.5), &config).unwrap();

    // Whole window retained: 2 observed + 32 filled rows.
    assert_eq!(series.len(), 34);
    assert_eq!(series.observed_count(), 2);
    assert_eq!(series.interpolated_count(), 32);
}

#[test]
fn run_of_max_gap_days_plus_one_is_dropped() {
    let config = GapFillConfig::new().with_max_gap_days(32);
    let series = fill(&pair_with_gap(33, 0.3, 0.5), &config).unwrap();

    // Only the two real observations survive.
    assert_eq!(series.len(), 2);
    assert_eq!(series.interpolated_count(), 0);
    assert_eq!(series.points()[0].date, d(2023, 4, 1));
    assert_eq!(series.points()[1].date, d(2023, 5, 5));
}

#[test]
fn mixed_window_drops_only_the_oversized_run() {
    // Observations on days 0, 10, and 50 of the window: the 9-day run is
    // filled, the 39-day run is dropped along with its interior days.
    let start = d(2023, 4, 1);
    let input = vec![
        obs(start, 0.3),
        obs(start + Days::new(10), 0.5),
        obs(start + Days::new(50), 0.4),
    ];
    let config = GapFillConfig::new().with_max_gap_days(32);
    let series = fill(&input, &config).unwrap();

    // Days 0..=10 plus day 50.
    assert_eq!(series.len(), 12);
    assert_eq!(series.observed_count(), 3);
    assert_eq!(series.interpolated_count(), 9);

    // The filled stretch is calendar-complete.
    for (i, point) in series.points().iter().take(11).enumerate() {
        assert_eq!(point.date, start + Days::new(i as u64));
    }

    // Days 11..=49 are absent; day 50 is retained and exact.
    let last = series.points().last().unwrap();
    assert_eq!(last.date, start + Days::new(50));
    assert_eq!(last.mean, 0.4);
    assert!(!last.is_interpolated);

    // Observed endpoints of the filled stretch are exact too.
    assert_eq!(series.points()[0].mean, 0.3);
    assert_eq!(series.points()[10].mean, 0.5);
}

#[test]
fn output_dates_are_strictly_increasing() {
    let start = d(2023, 4, 1);
    let input = vec![
        obs(start, 0.3),
        obs(start + Days::new(10), 0.5),
        obs(start + Days::new(50), 0.4),
        obs(start + Days::new(55), 0.45),
    ];
    let series = fill(&input, &GapFillConfig::new()).unwrap();
    for pair in series.points().windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn tight_threshold_keeps_only_observed_rows() {
    let config = GapFillConfig::new().with_max_gap_days(1);
    let start = d(2023, 4, 1);
    let input = vec![
        obs(start, 0.3),
        obs(start + Days::new(5), 0.5),
        obs(start + Days::new(10), 0.4),
    ];
    let series = fill(&input, &config).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.interpolated_count(), 0);
}
