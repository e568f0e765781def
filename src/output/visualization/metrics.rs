//! Aggregate time-evolution metrics (`metrics.png`)
//!
//! Two stacked panels against simulation time: total energy on top, state
//! norm below.
//!
//! # Usage
//!
//! ```rust,ignore
//! use solver_viz::output::visualization::render_aggregate_metrics;
//!
//! let report = solver_viz::report::load("runs/chain_8")?;
//! render_aggregate_metrics(&report, "runs/chain_8/plots")?;
//! ```

use std::path::{Path, PathBuf};

use super::config::PlotConfig;
use super::figure::{render_figure, Panel, Trace};
use crate::error::ReportError;
use crate::report::SolverReport;
use crate::series;

/// Output image name inside the plots directory
pub const METRICS_FILE: &str = "metrics.png";

/// The two panels of the aggregate figure
pub(crate) fn aggregate_panels(report: &SolverReport, config: &PlotConfig) -> Vec<Panel> {
    vec![
        Panel {
            title: "Energy Evolution".to_string(),
            ylabel: "Energy".to_string(),
            traces: vec![Trace::solid(
                "Total Energy",
                series::total_energies(report),
                config.energy_color,
            )],
        },
        Panel {
            title: "State Norm Evolution".to_string(),
            ylabel: "Norm".to_string(),
            traces: vec![Trace::solid(
                "State Norm",
                series::state_norms(report),
                config.norm_color,
            )],
        },
    ]
}

/// Plot total energy and state norm against time into `output_path`
///
/// # Errors
///
/// - [`ReportError::Schema`] if the report has no steps (nothing is written)
/// - [`ReportError::Render`] if the backend fails
pub fn plot_aggregate_metrics(
    report: &SolverReport,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), ReportError> {
    if report.steps().is_empty() {
        return Err(ReportError::schema("time_evolution.steps is empty"));
    }

    let default_config = PlotConfig::aggregate();
    let config = config.unwrap_or(&default_config);

    let time_points = series::times(report);
    let panels = aggregate_panels(report, config);

    render_figure(output_path.as_ref(), &time_points, &panels, config)
}

/// Write `<output_dir>/metrics.png` and return its path
pub fn render_aggregate_metrics(
    report: &SolverReport,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, ReportError> {
    let path = output_dir.as_ref().join(METRICS_FILE);
    plot_aggregate_metrics(report, &path, None)?;
    log::info!("aggregate metrics -> {}", path.display());
    Ok(path)
}
