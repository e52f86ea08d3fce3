//! Vegetation-index registry.

use std::str::FromStr;

use crate::error::SeriesError;

/// A supported vegetation index.
///
/// The band math that produces per-date statistics for an index lives with
/// the acquisition service; the pipeline itself only needs the facts
/// registered here. Adding an index means adding a variant and its two
/// associated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VegetationIndex {
    /// Modified Chlorophyll Absorption in Reflectance Index.
    Mcari,
    /// Soil-Adjusted Vegetation Index.
    Savi,
    /// Bare Soil Index.
    Bsi,
}

impl VegetationIndex {
    /// Canonical upper-case name, used as the artifact column prefix.
    pub fn name(self) -> &'static str {
        match self {
            VegetationIndex::Mcari => "MCARI",
            VegetationIndex::Savi => "SAVI",
            VegetationIndex::Bsi => "BSI",
        }
    }

    /// Physically plausible `(low, high)` range for the index mean.
    ///
    /// Values outside this range indicate a processing problem upstream
    /// (bad atmospheric correction, unmasked clouds) rather than vegetation
    /// signal.
    pub fn plausible_range(self) -> (f64, f64) {
        match self {
            VegetationIndex::Mcari => (-2.0, 2.0),
            VegetationIndex::Savi => (-1.0, 2.0),
            VegetationIndex::Bsi => (-1.0, 1.0),
        }
    }
}

impl FromStr for VegetationIndex {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mcari" => Ok(VegetationIndex::Mcari),
            "savi" => Ok(VegetationIndex::Savi),
            "bsi" => Ok(VegetationIndex::Bsi),
            _ => Err(SeriesError::UnknownIndex {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for VegetationIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
