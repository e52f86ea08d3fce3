//! Thresholds and plausible ranges for the quality checks.

use demeter_series::VegetationIndex;

/// Configuration for a validation pass.
///
/// The plausible range is a property of the index being analysed, so the
/// usual entry point is [`for_index`](Self::for_index); every threshold can
/// then be overridden individually.
///
/// # Example
///
/// ```
/// use demeter_series::VegetationIndex;
/// use demeter_validate::QualityConfig;
///
/// let config = QualityConfig::for_index(VegetationIndex::Savi)
///     .with_min_span_days(60);
/// assert_eq!(config.plausible_range(), (-1.0, 2.0));
/// ```
#[derive(Debug, Clone)]
pub struct QualityConfig {
    index_name: String,
    plausible_min: f64,
    plausible_max: f64,
    min_span_days: i64,
    max_gap_days: i64,
}

impl QualityConfig {
    /// Creates a configuration with the registered plausible range of
    /// `index` and the default coverage thresholds.
    ///
    /// Defaults: `min_span_days = 30`, `max_gap_days = 30`.
    pub fn for_index(index: VegetationIndex) -> Self {
        let (plausible_min, plausible_max) = index.plausible_range();
        Self {
            index_name: index.name().to_string(),
            plausible_min,
            plausible_max,
            min_span_days: 30,
            max_gap_days: 30,
        }
    }

    /// Overrides the plausible value range.
    pub fn with_plausible_range(mut self, min: f64, max: f64) -> Self {
        self.plausible_min = min;
        self.plausible_max = max;
        self
    }

    /// Overrides the minimum acceptable calendar span.
    pub fn with_min_span_days(mut self, min_span_days: i64) -> Self {
        self.min_span_days = min_span_days;
        self
    }

    /// Overrides the largest acceptable gap between retained rows.
    pub fn with_max_gap_days(mut self, max_gap_days: i64) -> Self {
        self.max_gap_days = max_gap_days;
        self
    }

    /// Index name used in issue descriptions.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Plausible `(low, high)` range for the primary statistic.
    pub fn plausible_range(&self) -> (f64, f64) {
        (self.plausible_min, self.plausible_max)
    }

    /// Minimum acceptable calendar span in days.
    pub fn min_span_days(&self) -> i64 {
        self.min_span_days
    }

    /// Largest acceptable gap between consecutive retained rows, in days.
    pub fn max_gap_days(&self) -> i64 {
        self.max_gap_days
    }
}
