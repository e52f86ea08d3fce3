//! Observation ingest and series read-back.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use demeter_calendar::parse_date;
use demeter_series::{DailyPoint, DailySeries, Observation, VegetationIndex};

use crate::error::IoError;

/// One raw row of an observation CSV. `mean` is optional on the wire: the
/// acquisition side emits a row per scene even when the spatial reducer
/// produced nothing usable.
#[derive(Debug, Deserialize)]
struct ObservationRecord {
    date: String,
    mean: Option<f64>,
    std_dev: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    cloud_cover: f64,
}

/// Reads per-date observation tuples from a CSV file.
///
/// Expected columns: `date, mean, std_dev, min, max, cloud_cover`. Rows
/// without a mean are not real observations and are skipped (logged at
/// debug level); everything else is validated into [`Observation`]s.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing file, [`IoError::Csv`]
/// for malformed CSV, [`IoError::Calendar`] for unparseable dates, and
/// [`IoError::Series`] when a row violates the observation invariants.
pub fn read_observations(path: &Path) -> Result<Vec<Observation>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut observations = Vec::new();
    for result in reader.deserialize() {
        let record: ObservationRecord = result?;
        let Some(mean) = record.mean else {
            debug!(date = %record.date, "skipping record without a mean");
            continue;
        };
        let date = parse_date(&record.date)?;
        observations.push(Observation::new(
            date,
            mean,
            record.std_dev,
            record.min,
            record.max,
            record.cloud_cover,
        )?);
    }
    Ok(observations)
}

/// Reads back an exported daily-series CSV.
///
/// The column set depends on the index the file was exported for; see
/// [`write_series`](crate::write_series) for the schema.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] when the file does not carry the
/// expected columns for `index`, [`IoError::InvalidValue`] for
/// unparseable fields, and the same file-level errors as
/// [`read_observations`].
pub fn read_series(path: &Path, index: VegetationIndex) -> Result<DailySeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize, IoError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })
    };

    let name = index.name();
    let date_col = column("date")?;
    let mean_col = column(&format!("{name}_mean"))?;
    let std_col = column(&format!("{name}_stdDev"))?;
    let min_col = column(&format!("{name}_min"))?;
    let max_col = column(&format!("{name}_max"))?;
    let cloud_col = column("cloud_cover")?;
    let interp_col = column("is_interpolated")?;

    let mut points = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let line = i + 1;
        let field = |col: usize| record.get(col).unwrap_or("");

        let date = parse_date(field(date_col))?;
        let mean = parse_required(field(mean_col), &format!("{name}_mean"), line)?;
        let is_interpolated = match field(interp_col) {
            "true" => true,
            "false" => false,
            other => {
                return Err(IoError::InvalidValue {
                    column: "is_interpolated".to_string(),
                    line,
                    reason: format!("expected true or false, got '{other}'"),
                });
            }
        };

        points.push(DailyPoint {
            date,
            mean,
            std_dev: parse_optional(field(std_col), &format!("{name}_stdDev"), line)?,
            min: parse_optional(field(min_col), &format!("{name}_min"), line)?,
            max: parse_optional(field(max_col), &format!("{name}_max"), line)?,
            cloud_cover: parse_optional(field(cloud_col), "cloud_cover", line)?,
            is_interpolated,
        });
    }

    Ok(DailySeries::new(points)?)
}

fn parse_required(field: &str, column: &str, line: usize) -> Result<f64, IoError> {
    field.parse::<f64>().map_err(|e| IoError::InvalidValue {
        column: column.to_string(),
        line,
        reason: e.to_string(),
    })
}

fn parse_optional(field: &str, column: &str, line: usize) -> Result<Option<f64>, IoError> {
    if field.is_empty() {
        Ok(None)
    } else {
        parse_required(field, column, line).map(Some)
    }
}
