//! Run metadata record and JSON writer.

use std::path::Path;

use serde::Serialize;

use crate::error::IoError;

/// Everything worth remembering about one analysis run.
///
/// Written next to the series export so a result can be interpreted
/// without the log: the window, the configuration that produced it, the
/// validator's findings, and a few summary numbers.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    /// Run timestamp, `YYYYMMDD_HHMMSS`, shared with the artifact names.
    pub timestamp: String,
    /// Index the run was for.
    pub index: String,
    /// First observed date, `YYYY-MM-DD`, if any data arrived.
    pub start_date: Option<String>,
    /// Last observed date, `YYYY-MM-DD`, if any data arrived.
    pub end_date: Option<String>,
    /// Longest missing-day run the filler was allowed to fill.
    pub max_gap_days: usize,
    /// Smoothness penalty used.
    pub lambda: f64,
    /// Smoother weight in the smoother/spline blend.
    pub smooth_weight: f64,
    /// Cloud-cover ceiling applied before filling.
    pub cloud_cover_threshold: f64,
    /// Issues reported by the validator, in check order.
    pub quality_issues: Vec<String>,
    /// Raw observation count after cloud filtering.
    pub total_observations: usize,
    /// Synthetic rows in the exported series.
    pub interpolated_points: usize,
    /// Mean of the primary statistic over the exported series.
    pub mean_index_value: Option<f64>,
    /// Mean cloud cover over the real observations.
    pub mean_cloud_cover: Option<f64>,
}

/// Writes the metadata record as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if the record cannot be encoded and
/// [`IoError::Io`] if the file cannot be written.
pub fn write_metadata(path: &Path, metadata: &RunMetadata) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(metadata)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunMetadata {
        RunMetadata {
            timestamp: "20230930_120000".to_string(),
            index: "MCARI".to_string(),
            start_date: Some("2023-04-01".to_string()),
            end_date: Some("2023-09-30".to_string()),
            max_gap_days: 32,
            lambda: 100.0,
            smooth_weight: 0.7,
            cloud_cover_threshold: 30.0,
            quality_issues: vec!["Missing values detected in the data".to_string()],
            total_observations: 18,
            interpolated_points: 120,
            mean_index_value: Some(0.41),
            mean_cloud_cover: Some(14.2),
        }
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["index"], "MCARI");
        assert_eq!(json["max_gap_days"], 32);
        assert_eq!(json["total_observations"], 18);
        assert_eq!(json["quality_issues"][0], "Missing values detected in the data");
        assert_eq!(json["mean_cloud_cover"], 14.2);
    }

    #[test]
    fn absent_summaries_serialize_as_null() {
        let mut metadata = sample();
        metadata.mean_index_value = None;
        metadata.mean_cloud_cover = None;
        let json = serde_json::to_value(metadata).unwrap();
        assert!(json["mean_index_value"].is_null());
        assert!(json["mean_cloud_cover"].is_null());
    }
}
