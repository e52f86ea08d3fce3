//! # demeter-io
//!
//! Tabular and metadata I/O for the analysis pipeline.
//!
//! Three artifacts cross this boundary:
//!
//! - **Observation CSV (in)**: per-date statistic tuples from the
//!   acquisition side, columns `date, mean, std_dev, min, max,
//!   cloud_cover`. Rows without a mean are not observations and are
//!   filtered out here.
//! - **Series CSV (out/in)**: the gap-filled daily series, columns
//!   `date, <INDEX>_mean, <INDEX>_stdDev, <INDEX>_min, <INDEX>_max,
//!   cloud_cover, is_interpolated`, dates as `YYYY-MM-DD`, absent
//!   statistics as empty fields.
//! - **Run metadata JSON (out)**: window, configuration, quality issues,
//!   and summary numbers for one analysis run.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `csv_read` | Observation ingest and series read-back |
//! | `csv_write` | Series export |
//! | `metadata` | Run metadata record and JSON writer |
//! | `error` | Error types |

mod csv_read;
mod csv_write;
mod error;
mod metadata;

pub use csv_read::{read_observations, read_series};
pub use csv_write::write_series;
pub use error::IoError;
pub use metadata::{RunMetadata, write_metadata};
