//! Bridges TOML configuration to per-crate config types.

use anyhow::{Context, Result};

use demeter_gapfill::GapFillConfig;
use demeter_series::VegetationIndex;
use demeter_validate::QualityConfig;

use crate::config::{AnalysisToml, QualityToml};

/// Resolves the vegetation index, letting a CLI override win over the
/// config file.
pub fn resolve_index(analysis: &AnalysisToml, cli_index: Option<&str>) -> Result<VegetationIndex> {
    let name = cli_index.unwrap_or(&analysis.index);
    name.parse()
        .with_context(|| format!("unsupported index '{name}'"))
}

/// Builds the gap-filler configuration.
pub fn build_gapfill_config(analysis: &AnalysisToml) -> Result<GapFillConfig> {
    let config = GapFillConfig::new()
        .with_max_gap_days(analysis.max_gap_days)
        .with_lambda(analysis.lambda)
        .with_smooth_weight(analysis.smooth_weight);
    config.validate()?;
    Ok(config)
}

/// Builds the validator configuration for `index`, applying any range
/// overrides from the quality section.
pub fn build_quality_config(index: VegetationIndex, quality: &QualityToml) -> QualityConfig {
    let mut config = QualityConfig::for_index(index)
        .with_min_span_days(quality.min_span_days)
        .with_max_gap_days(quality.max_gap_days);

    let (default_min, default_max) = index.plausible_range();
    if quality.plausible_min.is_some() || quality.plausible_max.is_some() {
        config = config.with_plausible_range(
            quality.plausible_min.unwrap_or(default_min),
            quality.plausible_max.unwrap_or(default_max),
        );
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_index_prefers_cli() {
        let analysis = AnalysisToml::default();
        let index = resolve_index(&analysis, Some("bsi")).unwrap();
        assert_eq!(index, VegetationIndex::Bsi);

        let index = resolve_index(&analysis, None).unwrap();
        assert_eq!(index, VegetationIndex::Mcari);
    }

    #[test]
    fn resolve_index_rejects_unknown() {
        let analysis = AnalysisToml::default();
        assert!(resolve_index(&analysis, Some("evi")).is_err());
    }

    #[test]
    fn gapfill_config_from_toml() {
        let analysis = AnalysisToml {
            max_gap_days: 16,
            lambda: 42.0,
            smooth_weight: 0.6,
            ..AnalysisToml::default()
        };
        let config = build_gapfill_config(&analysis).unwrap();
        assert_eq!(config.max_gap_days(), 16);
        assert_eq!(config.lambda(), 42.0);
        assert_eq!(config.smooth_weight(), 0.6);
    }

    #[test]
    fn gapfill_config_validation_propagates() {
        let analysis = AnalysisToml {
            lambda: -1.0,
            ..AnalysisToml::default()
        };
        assert!(build_gapfill_config(&analysis).is_err());
    }

    #[test]
    fn quality_config_defaults_to_index_range() {
        let config = build_quality_config(VegetationIndex::Savi, &QualityToml::default());
        assert_eq!(config.plausible_range(), (-1.0, 2.0));
    }

    #[test]
    fn quality_config_partial_override_keeps_other_bound() {
        let quality = QualityToml {
            plausible_max: Some(1.2),
            ..QualityToml::default()
        };
        let config = build_quality_config(VegetationIndex::Savi, &quality);
        assert_eq!(config.plausible_range(), (-1.0, 1.2));
    }
}
