//! The gap-filling entry point.

use demeter_calendar::{daily_sequence, day_offset};
use demeter_series::{DailyPoint, DailySeries, Observation};

use crate::config::GapFillConfig;
use crate::error::GapFillError;
use crate::interpolate::fill_column;
use crate::runs::run_length_at;
use crate::spline::NaturalCubic;
use crate::whittaker::whittaker_smooth;

/// Fewest real observations for a well-posed natural cubic; below this the
/// filler degrades to the smoother alone.
const MIN_SPLINE_POINTS: usize = 4;

/// Expands an irregular observation set to a gap-filled daily series.
///
/// The daily calendar spans `[min(date), max(date)]` of the input. Days
/// with a real observation carry its values exactly; days inside missing
/// runs of at most `max_gap_days` get an estimated mean (smoother/spline
/// blend) and `is_interpolated = true`; days inside longer runs are
/// dropped from the output entirely.
///
/// Input order does not matter. An empty input yields an empty series.
///
/// # Errors
///
/// Returns [`GapFillError::InvalidConfig`] for a bad configuration,
/// [`GapFillError::DuplicateDate`] when two observations share a date, and
/// [`GapFillError::SingularSystem`] if the smoothing solve fails — the one
/// condition with no safe fallback.
pub fn fill(
    observations: &[Observation],
    config: &GapFillConfig,
) -> Result<DailySeries, GapFillError> {
    config.validate()?;
    if observations.is_empty() {
        return Ok(DailySeries::empty());
    }

    let mut obs = observations.to_vec();
    obs.sort_by_key(Observation::date);
    for pair in obs.windows(2) {
        if pair[0].date() == pair[1].date() {
            return Err(GapFillError::DuplicateDate {
                date: pair[1].date(),
            });
        }
    }

    // Template axis: every day of the observed window, observations joined
    // on by date offset.
    let start = obs[0].date();
    let dates = daily_sequence(start, obs[obs.len() - 1].date());
    let n = dates.len();
    let mut slots: Vec<Option<&Observation>> = vec![None; n];
    for o in &obs {
        slots[day_offset(start, o.date()) as usize] = Some(o);
    }

    let missing: Vec<bool> = slots.iter().map(|s| s.is_none()).collect();
    if !missing.iter().any(|&m| m) {
        let points = slots
            .iter()
            .map(|s| DailyPoint::observed(s.expect("no day is missing")))
            .collect();
        return Ok(DailySeries::new(points).expect("calendar axis is strictly increasing"));
    }

    let run_lengths = run_length_at(&missing);

    // Weight 1 pins observed days; every missing day gets weight 0, and
    // oversized runs are dropped after the solve no matter what was
    // estimated for them.
    let weights: Vec<f64> = missing.iter().map(|&m| if m { 0.0 } else { 1.0 }).collect();

    // Missing entries enter the solve as the series' own mean, a neutral
    // placeholder that only affects conditioning.
    let observed_means: Vec<f64> = obs.iter().map(Observation::mean).collect();
    let placeholder = demeter_stats::mean(&observed_means);
    let x: Vec<f64> = slots
        .iter()
        .map(|s| s.map_or(placeholder, |o| o.mean()))
        .collect();

    let smoothed = whittaker_smooth(&x, &weights, config.lambda())?;

    let blended: Vec<f64> = if obs.len() >= MIN_SPLINE_POINTS {
        let xs: Vec<f64> = obs
            .iter()
            .map(|o| day_offset(start, o.date()) as f64)
            .collect();
        let spline = NaturalCubic::fit(&xs, &observed_means);
        let alpha = config.smooth_weight();
        smoothed
            .iter()
            .enumerate()
            .map(|(i, &z)| alpha * z + (1.0 - alpha) * spline.eval(i as f64))
            .collect()
    } else {
        smoothed
    };

    let std_col = fill_column(&column(&slots, Observation::std_dev), config.max_gap_days());
    let min_col = fill_column(&column(&slots, Observation::min), config.max_gap_days());
    let max_col = fill_column(&column(&slots, Observation::max), config.max_gap_days());

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        if run_lengths[i] > config.max_gap_days() {
            continue;
        }
        let point = match slots[i] {
            Some(o) => DailyPoint::observed(o),
            None => DailyPoint {
                date: dates[i],
                mean: blended[i],
                std_dev: std_col[i],
                min: min_col[i],
                max: max_col[i],
                cloud_cover: None,
                is_interpolated: true,
            },
        };
        points.push(point);
    }

    Ok(DailySeries::new(points).expect("calendar axis is strictly increasing"))
}

/// Projects one secondary statistic out of the joined slots.
fn column(
    slots: &[Option<&Observation>],
    get: impl Fn(&Observation) -> Option<f64>,
) -> Vec<Option<f64>> {
    slots.iter().map(|s| s.and_then(|o| get(o))).collect()
}
