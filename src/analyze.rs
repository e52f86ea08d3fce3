use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, warn};

use demeter_calendar::format_date;
use demeter_gapfill::fill;
use demeter_io::{RunMetadata, read_observations, write_metadata, write_series};
use demeter_series::{DailySeries, Observation};
use demeter_validate::validate;

use crate::cli::AnalyzeArgs;
use crate::config::DemeterConfig;
use crate::convert;

/// Run the full analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    // Step 1: Load configuration and resolve overrides
    let config = DemeterConfig::load(&args.config)?;
    let index = convert::resolve_index(&config.analysis, args.index.as_deref())?;
    let input = args
        .input
        .or_else(|| config.io.input.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("no input path: set [io].input in config or use --input")
        })?;
    let output_dir = args.output_dir.unwrap_or_else(|| config.io.output_dir.clone());

    // Step 2: Read observation tuples
    info!(path = %input.display(), index = %index, "reading observations");
    let raw = read_observations(&input)
        .with_context(|| format!("failed to read observations: {}", input.display()))?;
    info!(n_observations = raw.len(), "observations loaded");

    // Step 3: Drop cloudy scenes
    let threshold = config.analysis.cloud_cover_threshold;
    let observations: Vec<Observation> = raw
        .iter()
        .filter(|o| o.cloud_cover() <= threshold)
        .copied()
        .collect();
    if observations.len() < raw.len() {
        info!(
            n_dropped = raw.len() - observations.len(),
            threshold, "dropped cloudy observations"
        );
    }
    if observations.is_empty() {
        warn!("no valid observations for the requested window");
        return Ok(());
    }

    // Step 4: Fill temporal gaps
    let fill_config = convert::build_gapfill_config(&config.analysis)?;
    info!(max_gap_days = fill_config.max_gap_days(), "filling temporal gaps");
    let series = fill(&observations, &fill_config).context("gap filling failed")?;
    info!(
        total_points = series.total_points(),
        observed = series.observed_count(),
        interpolated = series.interpolated_count(),
        "gap filling complete"
    );

    // Step 5: Validate; issues are reported, never fatal
    let quality_config = convert::build_quality_config(index, &config.quality);
    let report = validate(&series, &quality_config);
    for issue in report.issues() {
        warn!(%issue, "quality issue detected");
    }

    // Step 6: Write timestamped artifacts
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

    let csv_path = output_dir.join(format!(
        "{}_results_{timestamp}.csv",
        index.name().to_lowercase()
    ));
    write_series(&csv_path, &series, index)
        .with_context(|| format!("failed to write series: {}", csv_path.display()))?;
    info!(path = %csv_path.display(), "series written");

    let metadata_path = output_dir.join(format!("analysis_metadata_{timestamp}.json"));
    let metadata = build_metadata(
        timestamp,
        index.name(),
        &config,
        &observations,
        &series,
        report.issues(),
    );
    write_metadata(&metadata_path, &metadata)
        .with_context(|| format!("failed to write metadata: {}", metadata_path.display()))?;
    info!(path = %metadata_path.display(), "metadata written");

    info!(output_dir = %output_dir.display(), "analysis complete");
    Ok(())
}

/// Derives the run-metadata record from the pipeline outputs.
fn build_metadata(
    timestamp: String,
    index_name: &str,
    config: &DemeterConfig,
    observations: &[Observation],
    series: &DailySeries,
    issues: &[String],
) -> RunMetadata {
    let means: Vec<f64> = series.points().iter().map(|p| p.mean).collect();
    let clouds: Vec<f64> = observations.iter().map(Observation::cloud_cover).collect();

    RunMetadata {
        timestamp,
        index: index_name.to_string(),
        start_date: series.first_date().map(format_date),
        end_date: series.last_date().map(format_date),
        max_gap_days: config.analysis.max_gap_days,
        lambda: config.analysis.lambda,
        smooth_weight: config.analysis.smooth_weight,
        cloud_cover_threshold: config.analysis.cloud_cover_threshold,
        quality_issues: issues.to_vec(),
        total_observations: observations.len(),
        interpolated_points: series.interpolated_count(),
        mean_index_value: (!means.is_empty()).then(|| demeter_stats::mean(&means)),
        mean_cloud_cover: (!clouds.is_empty()).then(|| demeter_stats::mean(&clouds)),
    }
}
