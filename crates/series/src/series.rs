//! Ordered daily series with derived counts.

use chrono::NaiveDate;

use crate::error::SeriesError;
use crate::point::DailyPoint;

/// A gap-filled, quality-flaggable daily series.
///
/// Rows are strictly increasing by date. The series spans the observed
/// window at daily resolution except where oversized gaps were dropped, so
/// consecutive rows are usually, but not always, one day apart. Constructed
/// once per analysis run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    points: Vec<DailyPoint>,
}

impl DailySeries {
    /// Creates a series from ordered rows.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::UnorderedDates`] if any row's date is not
    /// strictly after its predecessor's.
    pub fn new(points: Vec<DailyPoint>) -> Result<Self, SeriesError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::UnorderedDates {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self { points })
    }

    /// Creates an empty series.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns the rows in date order.
    pub fn points(&self) -> &[DailyPoint] {
        &self.points
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total row count, for captioning. Same as [`len`](Self::len).
    pub fn total_points(&self) -> usize {
        self.points.len()
    }

    /// Number of rows backed by a real observation.
    pub fn observed_count(&self) -> usize {
        self.points.iter().filter(|p| !p.is_interpolated).count()
    }

    /// Number of synthesised rows.
    pub fn interpolated_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_interpolated).count()
    }

    /// Date of the first row, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Date of the last row, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Whole days between the first and last row. Zero for empty and
    /// single-row series.
    pub fn span_days(&self) -> i64 {
        match (self.first_date(), self.last_date()) {
            (Some(first), Some(last)) => (last - first).num_days(),
            _ => 0,
        }
    }
}
