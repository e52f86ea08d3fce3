//! Error types for the demeter-calendar crate.

/// Error type for all fallible operations in the demeter-calendar crate.
///
/// Covers parse failures for calendar-date strings arriving from external
/// acquisition services or tabular files.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The string that failed to parse.
        input: String,
        /// Description of the underlying parse failure.
        reason: String,
    },
}
