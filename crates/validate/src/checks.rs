//! The validation entry point and individual checks.

use demeter_series::DailySeries;

use crate::config::QualityConfig;
use crate::report::ValidationReport;

/// Validates a gap-filled series.
///
/// An empty series short-circuits with a single issue; otherwise every
/// check runs regardless of earlier findings, each appending one issue
/// description. Pure and idempotent: the same series always yields the
/// same report.
pub fn validate(series: &DailySeries, config: &QualityConfig) -> ValidationReport {
    if series.is_empty() {
        return ValidationReport::from_issues(vec!["No valid data found".to_string()]);
    }

    let mut issues = Vec::new();

    if has_missing_values(series) {
        issues.push("Missing values detected in the data".to_string());
    }

    let (low, high) = config.plausible_range();
    if has_unrealistic_values(series, low, high) {
        issues.push(format!(
            "Unrealistic {} values detected",
            config.index_name()
        ));
    }

    let span = series.span_days();
    if span < config.min_span_days() {
        issues.push(format!("Short temporal coverage: {span} days"));
    }

    if has_large_gaps(series, config.max_gap_days()) {
        issues.push(format!(
            "Large temporal gaps detected (>{} days)",
            config.max_gap_days()
        ));
    }

    ValidationReport::from_issues(issues)
}

/// Any absent statistic anywhere in the series.
///
/// Interpolated rows never carry cloud cover, and their secondary
/// statistics may be absent too, so a series with synthetic rows usually
/// trips this check; it tells the reader the export is not a dense table.
pub(crate) fn has_missing_values(series: &DailySeries) -> bool {
    series.points().iter().any(|p| {
        !p.mean.is_finite()
            || p.std_dev.is_none()
            || p.min.is_none()
            || p.max.is_none()
            || p.cloud_cover.is_none()
    })
}

/// Any primary statistic strictly outside the plausible range.
pub(crate) fn has_unrealistic_values(series: &DailySeries, low: f64, high: f64) -> bool {
    series
        .points()
        .iter()
        .any(|p| p.mean < low || p.mean > high)
}

/// Any consecutive retained rows more than `max_gap_days` apart.
pub(crate) fn has_large_gaps(series: &DailySeries, max_gap_days: i64) -> bool {
    series
        .points()
        .windows(2)
        .any(|pair| (pair[1].date - pair[0].date).num_days() > max_gap_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use demeter_series::{DailyPoint, VegetationIndex};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()
    }

    fn full_row(day: u64, mean: f64) -> DailyPoint {
        DailyPoint {
            date: start() + Days::new(day),
            mean,
            std_dev: Some(0.05),
            min: Some(mean - 0.1),
            max: Some(mean + 0.1),
            cloud_cover: Some(12.0),
            is_interpolated: false,
        }
    }

    fn dense_series(n_days: u64) -> DailySeries {
        DailySeries::new((0..n_days).map(|i| full_row(i, 0.4)).collect()).unwrap()
    }

    fn config() -> QualityConfig {
        QualityConfig::for_index(VegetationIndex::Mcari)
    }

    #[test]
    fn clean_series_passes() {
        let report = validate(&dense_series(40), &config());
        assert!(report.is_valid(), "issues: {:?}", report.issues());
    }

    #[test]
    fn empty_series_short_circuits() {
        let report = validate(&DailySeries::empty(), &config());
        assert!(!report.is_valid());
        assert_eq!(report.issues(), ["No valid data found"]);
    }

    #[test]
    fn absent_cloud_cover_counts_as_missing() {
        let mut rows: Vec<DailyPoint> = (0..40).map(|i| full_row(i, 0.4)).collect();
        rows[7].cloud_cover = None;
        rows[7].is_interpolated = true;
        let report = validate(&DailySeries::new(rows).unwrap(), &config());
        assert_eq!(report.issues(), ["Missing values detected in the data"]);
    }

    #[test]
    fn absent_secondary_counts_as_missing() {
        let mut rows: Vec<DailyPoint> = (0..40).map(|i| full_row(i, 0.4)).collect();
        rows[3].std_dev = None;
        assert!(has_missing_values(&DailySeries::new(rows).unwrap()));
    }

    #[test]
    fn unrealistic_value_is_flagged_with_index_name() {
        let mut rows: Vec<DailyPoint> = (0..40).map(|i| full_row(i, 0.4)).collect();
        rows[10].mean = 2.5;
        let report = validate(&DailySeries::new(rows).unwrap(), &config());
        assert_eq!(report.issues(), ["Unrealistic MCARI values detected"]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut rows: Vec<DailyPoint> = (0..40).map(|i| full_row(i, 0.4)).collect();
        rows[0].mean = -2.0;
        rows[1].mean = 2.0;
        assert!(validate(&DailySeries::new(rows).unwrap(), &config()).is_valid());
    }

    #[test]
    fn per_index_range_differs() {
        let mut rows: Vec<DailyPoint> = (0..40).map(|i| full_row(i, 0.4)).collect();
        rows[10].mean = 1.5;
        let series = DailySeries::new(rows).unwrap();

        // 1.5 is plausible for MCARI but not for BSI.
        assert!(validate(&series, &config()).is_valid());
        let report = validate(&series, &QualityConfig::for_index(VegetationIndex::Bsi));
        assert_eq!(report.issues(), ["Unrealistic BSI values detected"]);
    }

    #[test]
    fn short_coverage_reports_the_span() {
        let report = validate(&dense_series(15), &config());
        assert_eq!(report.issues(), ["Short temporal coverage: 14 days"]);
    }

    #[test]
    fn residual_gap_is_flagged() {
        let mut rows: Vec<DailyPoint> = (0..20).map(|i| full_row(i, 0.4)).collect();
        rows.extend((51..71).map(|i| full_row(i, 0.4)));
        let report = validate(&DailySeries::new(rows).unwrap(), &config());
        assert_eq!(report.issues(), ["Large temporal gaps detected (>30 days)"]);
    }

    #[test]
    fn gap_of_exactly_the_threshold_passes() {
        let rows = vec![full_row(0, 0.4), full_row(30, 0.4)];
        assert!(!has_large_gaps(&DailySeries::new(rows).unwrap(), 30));
    }

    #[test]
    fn independent_checks_accumulate() {
        // Short span AND an unrealistic value AND a missing secondary.
        let mut rows: Vec<DailyPoint> = (0..10).map(|i| full_row(i, 0.4)).collect();
        rows[2].mean = 5.0;
        rows[4].min = None;
        let report = validate(&DailySeries::new(rows).unwrap(), &config());
        assert_eq!(
            report.issues(),
            [
                "Missing values detected in the data",
                "Unrealistic MCARI values detected",
                "Short temporal coverage: 9 days",
            ]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let mut rows: Vec<DailyPoint> = (0..10).map(|i| full_row(i, 0.4)).collect();
        rows[2].mean = 5.0;
        let series = DailySeries::new(rows).unwrap();
        let first = validate(&series, &config());
        let second = validate(&series, &config());
        assert_eq!(first, second);
    }
}
