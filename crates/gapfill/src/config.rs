//! Configuration for the gap filler.

use crate::error::GapFillError;

/// Configuration for a gap-filling run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use demeter_gapfill::GapFillConfig;
///
/// let config = GapFillConfig::new()
///     .with_max_gap_days(16)
///     .with_lambda(50.0);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GapFillConfig {
    /// Longest missing-day run that may be filled; longer runs are dropped.
    max_gap_days: usize,
    /// Smoothness penalty for the least-squares smoother.
    lambda: f64,
    /// Weight of the smoothed estimate in the smoother/spline blend.
    smooth_weight: f64,
}

impl GapFillConfig {
    /// Creates a configuration with the default parameters.
    ///
    /// Defaults: `max_gap_days = 32`, `lambda = 100.0`,
    /// `smooth_weight = 0.7`.
    pub fn new() -> Self {
        Self {
            max_gap_days: 32,
            lambda: 100.0,
            smooth_weight: 0.7,
        }
    }

    /// Sets the longest fillable missing-day run.
    pub fn with_max_gap_days(mut self, max_gap_days: usize) -> Self {
        self.max_gap_days = max_gap_days;
        self
    }

    /// Sets the smoothness penalty (higher values produce a smoother fill).
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Sets the smoother weight in the smoother/spline blend; the spline
    /// receives the complement.
    pub fn with_smooth_weight(mut self, smooth_weight: f64) -> Self {
        self.smooth_weight = smooth_weight;
        self
    }

    /// Returns the longest fillable missing-day run.
    pub fn max_gap_days(&self) -> usize {
        self.max_gap_days
    }

    /// Returns the smoothness penalty.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the smoother weight in the blend.
    pub fn smooth_weight(&self) -> f64 {
        self.smooth_weight
    }

    /// Validates parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GapFillError::InvalidConfig`] when `max_gap_days` is zero,
    /// `lambda` is not a positive finite number, or `smooth_weight` is
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), GapFillError> {
        if self.max_gap_days == 0 {
            return Err(GapFillError::InvalidConfig {
                reason: "max_gap_days must be at least 1".to_string(),
            });
        }
        if !self.lambda.is_finite() || self.lambda <= 0.0 {
            return Err(GapFillError::InvalidConfig {
                reason: format!("lambda must be positive and finite, got {}", self.lambda),
            });
        }
        if !self.smooth_weight.is_finite() || !(0.0..=1.0).contains(&self.smooth_weight) {
            return Err(GapFillError::InvalidConfig {
                reason: format!(
                    "smooth_weight must be within [0, 1], got {}",
                    self.smooth_weight
                ),
            });
        }
        Ok(())
    }
}

impl Default for GapFillConfig {
    fn default() -> Self {
        Self::new()
    }
}
