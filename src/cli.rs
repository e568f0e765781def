//! Command-line entry point
//!
//! ```text
//! solver-viz <CHECKPOINT_DIR>
//! ```
//!
//! Reads `<CHECKPOINT_DIR>/solver_data.json` and writes three PNG files into
//! `<CHECKPOINT_DIR>/plots/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::output::visualization::{render_aggregate_metrics, render_sweep_metrics};
use crate::report;
use crate::series::SweepDirection;

/// Name of the output directory created inside the checkpoint directory
pub const PLOTS_DIR: &str = "plots";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render solver checkpoint metrics to PNG charts")]
pub struct Args {
    /// Directory containing solver output files (solver_data.json)
    #[arg(value_name = "CHECKPOINT_DIR")]
    pub checkpoint_dir: PathBuf,
}

/// Output directory for a checkpoint directory
pub fn plots_dir(checkpoint_dir: &Path) -> PathBuf {
    checkpoint_dir.join(PLOTS_DIR)
}

/// Create the plots directory, load the checkpoint and render all figures
///
/// Stages run in order and the first failure aborts the rest. Returns the
/// plots directory.
pub fn run(args: &Args) -> Result<PathBuf> {
    let output_dir = plots_dir(&args.checkpoint_dir);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let report = report::load(&args.checkpoint_dir)
        .with_context(|| format!("loading checkpoint {}", args.checkpoint_dir.display()))?;

    render_aggregate_metrics(&report, &output_dir).context("rendering aggregate metrics")?;

    for direction in SweepDirection::ALL {
        render_sweep_metrics(&report, &output_dir, direction).with_context(|| {
            format!("rendering {} sweep metrics", direction.label().to_lowercase())
        })?;
    }

    Ok(output_dir)
}
