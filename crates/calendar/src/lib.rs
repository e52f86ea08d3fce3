//! # demeter-calendar
//!
//! Daily calendar axis for satellite acquisition dates.
//!
//! Satellite scenes arrive on irregular real-calendar dates; everything
//! downstream (gap classification, smoothing, export) works on a complete
//! daily axis between the first and last acquisition. This crate provides
//! the axis: ISO-8601 parsing, inclusive daily sequences, and span
//! arithmetic on [`chrono::NaiveDate`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | ISO-8601 parsing and formatting |
//! | `sequence` | Inclusive daily sequence generation and spans |
//! | `error` | Error types |

mod date;
mod error;
mod sequence;

pub use date::{format_date, parse_date};
pub use error::CalendarError;
pub use sequence::{daily_sequence, day_offset, span_days};
