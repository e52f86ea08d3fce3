//! # demeter-gapfill
//!
//! Temporal gap filling for irregular vegetation-index series.
//!
//! Satellite acquisitions are irregular and cloud-gapped; downstream
//! analysis wants a daily series. The filler expands the observed window to
//! a complete daily calendar, classifies the missing-day runs by length,
//! and estimates the primary statistic inside short runs with a blend of a
//! penalized least-squares smoother and a natural cubic spline. Runs longer
//! than the configured threshold carry too little information to fill and
//! are dropped from the output entirely.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A[observations] -->|"daily calendar join"| B[sparse daily axis]
//!     B -->|"missing_runs()"| C[run lengths + weights]
//!     B -->|"whittaker_smooth()"| D[smoothed mean]
//!     B -->|"NaturalCubic::fit()"| E[spline mean]
//!     D --> F[blended fill]
//!     E --> F
//!     C --> G[drop oversized runs]
//!     F --> G
//!     G --> H[DailySeries]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use demeter_gapfill::{GapFillConfig, fill};
//!
//! let config = GapFillConfig::new().with_max_gap_days(32);
//! let series = fill(&observations, &config)?;
//! assert!(series.interpolated_count() <= series.total_points());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `fill` | The gap-filling entry point |
//! | `runs` | Maximal missing-run partitioning |
//! | `whittaker` | Penalized least-squares smoother over a banded system |
//! | `spline` | Natural cubic spline |
//! | `interpolate` | Secondary-statistic column interpolation |
//! | `config` | Filler configuration |
//! | `error` | Error types |

mod config;
mod error;
mod fill;
mod interpolate;
mod runs;
mod spline;
mod whittaker;

pub use config::GapFillConfig;
pub use error::GapFillError;
pub use fill::fill;
pub use runs::{MissingRun, missing_runs};
pub use spline::NaturalCubic;
pub use whittaker::whittaker_smooth;
