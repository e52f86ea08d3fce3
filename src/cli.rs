use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Demeter vegetation-index time-series analyzer.
#[derive(Parser)]
#[command(
    name = "demeter",
    version,
    about = "Gap-filled vegetation-index time series from satellite statistics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis pipeline: ingest, gap-fill, validate, export.
    Analyze(AnalyzeArgs),
    /// Re-run quality validation on an exported series file.
    Check(CheckArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "demeter.toml")]
    pub config: PathBuf,

    /// Override observation CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override vegetation index from config (mcari, savi, or bsi).
    #[arg(long)]
    pub index: Option<String>,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "demeter.toml")]
    pub config: PathBuf,

    /// Path to an exported series CSV.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Override vegetation index from config (mcari, savi, or bsi).
    #[arg(long)]
    pub index: Option<String>,
}
