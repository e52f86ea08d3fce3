//! Error types for demeter-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the demeter-io crate.
///
/// Covers filesystem and CSV-format failures, calendar and data-model
/// violations found while parsing, and JSON serialization problems.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps a filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying filesystem failure.
        reason: String,
    },

    /// Wraps an error originating from the demeter-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Wraps an error originating from the demeter-series crate.
    #[error("series error: {reason}")]
    Series {
        /// Description of the underlying data-model violation.
        reason: String,
    },

    /// Returned when a required column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a field cannot be parsed.
    #[error("invalid value in column '{column}' at line {line}: {reason}")]
    InvalidValue {
        /// Column of the offending field.
        column: String,
        /// 1-based data line number (excluding the header).
        line: usize,
        /// Description of the parse issue.
        reason: String,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying JSON failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<demeter_calendar::CalendarError> for IoError {
    fn from(e: demeter_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}

impl From<demeter_series::SeriesError> for IoError {
    fn from(e: demeter_series::SeriesError) -> Self {
        IoError::Series {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Serialization {
            reason: e.to_string(),
        }
    }
}
