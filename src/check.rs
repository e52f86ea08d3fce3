use anyhow::{Context, Result};
use tracing::{info, warn};

use demeter_io::read_series;
use demeter_validate::validate;

use crate::cli::CheckArgs;
use crate::config::DemeterConfig;
use crate::convert;

/// Re-run quality validation on an exported series file.
pub fn run(args: CheckArgs) -> Result<()> {
    let config = DemeterConfig::load(&args.config)?;
    let index = convert::resolve_index(&config.analysis, args.index.as_deref())?;

    info!(path = %args.input.display(), index = %index, "reading series");
    let series = read_series(&args.input, index)
        .with_context(|| format!("failed to read series: {}", args.input.display()))?;
    info!(
        total_points = series.total_points(),
        observed = series.observed_count(),
        interpolated = series.interpolated_count(),
        "series loaded"
    );

    let quality_config = convert::build_quality_config(index, &config.quality);
    let report = validate(&series, &quality_config);

    if report.is_valid() {
        println!("OK: no quality issues");
    } else {
        for issue in report.issues() {
            warn!(%issue, "quality issue detected");
            println!("issue: {issue}");
        }
    }
    Ok(())
}
