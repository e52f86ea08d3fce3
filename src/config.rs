use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// Top-level Demeter configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DemeterConfig {
    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Quality-check settings.
    #[serde(default)]
    pub quality: QualityToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,
}

impl DemeterConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults cover a complete run,
    /// so it is reported and the defaults are used.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_index")]
    pub index: String,
    #[serde(default = "default_max_gap_days")]
    pub max_gap_days: usize,
    #[serde(default = "default_lambda")]
    pub lambda: f64,
    #[serde(default = "default_smooth_weight")]
    pub smooth_weight: f64,
    #[serde(default = "default_cloud_cover_threshold")]
    pub cloud_cover_threshold: f64,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            index: default_index(),
            max_gap_days: default_max_gap_days(),
            lambda: default_lambda(),
            smooth_weight: default_smooth_weight(),
            cloud_cover_threshold: default_cloud_cover_threshold(),
        }
    }
}

fn default_index() -> String {
    "mcari".to_string()
}
fn default_max_gap_days() -> usize {
    32
}
fn default_lambda() -> f64 {
    100.0
}
fn default_smooth_weight() -> f64 {
    0.7
}
fn default_cloud_cover_threshold() -> f64 {
    30.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QualityToml {
    #[serde(default = "default_min_span_days")]
    pub min_span_days: i64,
    #[serde(default = "default_quality_max_gap_days")]
    pub max_gap_days: i64,
    /// Optional override of the index's registered plausible range.
    #[serde(default)]
    pub plausible_min: Option<f64>,
    #[serde(default)]
    pub plausible_max: Option<f64>,
}

impl Default for QualityToml {
    fn default() -> Self {
        Self {
            min_span_days: default_min_span_days(),
            max_gap_days: default_quality_max_gap_days(),
            plausible_min: None,
            plausible_max: None,
        }
    }
}

fn default_min_span_days() -> i64 {
    30
}
fn default_quality_max_gap_days() -> i64 {
    30
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
