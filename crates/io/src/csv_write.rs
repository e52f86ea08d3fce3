//! Series export.

use std::path::Path;

use demeter_calendar::format_date;
use demeter_series::{DailySeries, VegetationIndex};

use crate::error::IoError;

/// Writes a daily series as the tabular export artifact.
///
/// Columns: `date, <INDEX>_mean, <INDEX>_stdDev, <INDEX>_min, <INDEX>_max,
/// cloud_cover, is_interpolated`, one row per retained daily-series entry,
/// dates formatted `YYYY-MM-DD`, absent statistics as empty fields.
///
/// # Errors
///
/// Returns [`IoError::Csv`] when the file cannot be created or a row
/// cannot be written.
pub fn write_series(
    path: &Path,
    series: &DailySeries,
    index: VegetationIndex,
) -> Result<(), IoError> {
    let name = index.name();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "date".to_string(),
        format!("{name}_mean"),
        format!("{name}_stdDev"),
        format!("{name}_min"),
        format!("{name}_max"),
        "cloud_cover".to_string(),
        "is_interpolated".to_string(),
    ])?;

    for point in series.points() {
        writer.write_record([
            format_date(point.date),
            point.mean.to_string(),
            optional(point.std_dev),
            optional(point.min),
            optional(point.max),
            optional(point.cloud_cover),
            point.is_interpolated.to_string(),
        ])?;
    }
    writer.flush().map_err(IoError::from)
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
