//! Validated per-date raw statistics.

use chrono::NaiveDate;

use crate::error::SeriesError;

/// One real measurement for one calendar date: spatial statistics of the
/// index over the field polygon, plus the cloud cover of the source scene.
///
/// The primary statistic (`mean`) is always present and finite; tuples
/// without a usable mean are filtered out at the acquisition boundary and
/// never become observations. The secondary statistics may individually be
/// absent when the upstream reducer could not produce them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    date: NaiveDate,
    mean: f64,
    std_dev: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    cloud_cover: f64,
}

impl Observation {
    /// Creates a validated observation.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonFiniteMean`] if `mean` is NaN or infinite,
    /// or [`SeriesError::CloudCoverOutOfRange`] if `cloud_cover` is outside
    /// `[0, 100]`.
    pub fn new(
        date: NaiveDate,
        mean: f64,
        std_dev: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
        cloud_cover: f64,
    ) -> Result<Self, SeriesError> {
        if !mean.is_finite() {
            return Err(SeriesError::NonFiniteMean { date });
        }
        if !(0.0..=100.0).contains(&cloud_cover) {
            return Err(SeriesError::CloudCoverOutOfRange {
                date,
                value: cloud_cover,
            });
        }
        Ok(Self {
            date,
            mean,
            std_dev,
            min,
            max,
            cloud_cover,
        })
    }

    /// Returns the acquisition date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the spatial mean of the index (the primary statistic).
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the spatial standard deviation, if produced upstream.
    pub fn std_dev(&self) -> Option<f64> {
        self.std_dev
    }

    /// Returns the spatial minimum, if produced upstream.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Returns the spatial maximum, if produced upstream.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Returns the cloud cover percentage of the source scene.
    pub fn cloud_cover(&self) -> f64 {
        self.cloud_cover
    }
}
