//! Error types for the demeter-gapfill crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the demeter-gapfill crate.
///
/// Data-sparsity conditions (empty input, too few points for the spline)
/// degrade gracefully and are not errors; only invalid configuration,
/// violated input invariants, and genuine numerical failure surface here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GapFillError {
    /// Returned when the configuration fails validation.
    #[error("invalid gap-fill config: {reason}")]
    InvalidConfig {
        /// Description of the violated constraint.
        reason: String,
    },

    /// Returned when two observations share a calendar date.
    #[error("duplicate observation date: {date}")]
    DuplicateDate {
        /// The duplicated date.
        date: NaiveDate,
    },

    /// Returned when the smoothing system is not positive definite.
    ///
    /// The smoother has no safe fallback value, so this aborts the fill.
    #[error("smoothing system not positive definite at row {row}")]
    SingularSystem {
        /// Row at which the Cholesky factorization found a non-positive
        /// pivot.
        row: usize,
    },
}
