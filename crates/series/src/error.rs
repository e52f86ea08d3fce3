//! Error types for the demeter-series crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the demeter-series crate.
///
/// Covers validation failures when constructing observations and daily
/// series, plus unknown index names arriving from configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when an observation's primary statistic is NaN or infinite.
    #[error("non-finite mean for {date}")]
    NonFiniteMean {
        /// Date of the offending observation.
        date: NaiveDate,
    },

    /// Returned when a cloud-cover percentage falls outside 0-100.
    #[error("cloud cover {value} out of range [0, 100] for {date}")]
    CloudCoverOutOfRange {
        /// Date of the offending observation.
        date: NaiveDate,
        /// The invalid percentage.
        value: f64,
    },

    /// Returned when daily-series rows are not strictly increasing by date.
    #[error("series dates not strictly increasing: {prev} then {next}")]
    UnorderedDates {
        /// Date of the earlier row.
        prev: NaiveDate,
        /// Date of the offending row.
        next: NaiveDate,
    },

    /// Returned when an index name is not in the registry.
    #[error("unknown vegetation index '{name}' (expected mcari, savi, or bsi)")]
    UnknownIndex {
        /// The unrecognised name.
        name: String,
    },
}
