//! Daily-resolution row with interpolation flag.

use chrono::NaiveDate;

use crate::observation::Observation;

/// One row of a gap-filled daily series.
///
/// Carries the same statistics as an [`Observation`] plus the synthetic-row
/// flag. On interpolated rows the secondary statistics may still be absent
/// (only the mean is guaranteed filled) and `cloud_cover` is always absent,
/// since no scene was acquired that day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPoint {
    /// Calendar date of the row.
    pub date: NaiveDate,
    /// Index mean: observed exactly, or estimated on interpolated rows.
    pub mean: f64,
    /// Spatial standard deviation, if observed or interpolable.
    pub std_dev: Option<f64>,
    /// Spatial minimum, if observed or interpolable.
    pub min: Option<f64>,
    /// Spatial maximum, if observed or interpolable.
    pub max: Option<f64>,
    /// Cloud cover of the source scene; absent on interpolated rows.
    pub cloud_cover: Option<f64>,
    /// True when this row was synthesised rather than observed.
    pub is_interpolated: bool,
}

impl DailyPoint {
    /// Builds a real (observed) row from an observation, values carried
    /// over exactly.
    pub fn observed(obs: &Observation) -> Self {
        Self {
            date: obs.date(),
            mean: obs.mean(),
            std_dev: obs.std_dev(),
            min: obs.min(),
            max: obs.max(),
            cloud_cover: Some(obs.cloud_cover()),
            is_interpolated: false,
        }
    }
}
