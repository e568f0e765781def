//! Per-site sweep metrics (`forward_sweep_metrics.png`, `backward_sweep_metrics.png`)
//!
//! One panel per lattice site, stacked vertically. Each panel shows the site's
//! energy (solid) and state norm (dashed) against simulation time. The site
//! count `N` is read from the first step; every other step must match it.

use std::path::{Path, PathBuf};

use super::config::PlotConfig;
use super::figure::{render_figure, Panel, Trace};
use crate::error::ReportError;
use crate::report::SolverReport;
use crate::series::{self, SiteSeries, SweepDirection};

/// Panel for one site's series
fn site_panel(series: SiteSeries, config: &PlotConfig) -> Panel {
    let site = series.site;
    Panel {
        title: format!("Site {site} Metrics"),
        ylabel: "Value".to_string(),
        traces: vec![
            Trace::solid(format!("Site {site} Energy"), series.energies, config.energy_color),
            Trace::dashed(format!("Site {site} Norm"), series.norms, config.norm_color),
        ],
    }
}

/// All panels of a sweep figure, validated against ragged or empty sweeps
pub(crate) fn sweep_panels(
    report: &SolverReport,
    direction: SweepDirection,
    config: &PlotConfig,
) -> Result<Vec<Panel>, ReportError> {
    Ok(series::sweep_series(report, direction)?
        .into_iter()
        .map(|s| site_panel(s, config))
        .collect())
}

/// Plot every site of one sweep direction into `output_path`
///
/// With `config = None` the figure is [`PlotConfig::sweep`]: its height grows
/// with the number of sites. Returns the number of site panels drawn.
///
/// # Errors
///
/// - [`ReportError::Schema`] if the sweep is empty or ragged (nothing is written)
/// - [`ReportError::Render`] if the backend fails
pub fn plot_sweep_metrics(
    report: &SolverReport,
    direction: SweepDirection,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<usize, ReportError> {
    let n_sites = series::site_count(report, direction)?;

    let default_config = PlotConfig::sweep(direction, n_sites);
    let config = config.unwrap_or(&default_config);

    let panels = sweep_panels(report, direction, config)?;
    let time_points = series::times(report);

    render_figure(output_path.as_ref(), &time_points, &panels, config)?;
    Ok(panels.len())
}

/// Write `<output_dir>/{forward|backward}_sweep_metrics.png` and return its path
pub fn render_sweep_metrics(
    report: &SolverReport,
    output_dir: impl AsRef<Path>,
    direction: SweepDirection,
) -> Result<PathBuf, ReportError> {
    let path = output_dir.as_ref().join(direction.file_name());
    let n_sites = plot_sweep_metrics(report, direction, &path, None)?;
    log::info!(
        "{} sweep ({} sites) -> {}",
        direction.label().to_lowercase(),
        n_sites,
        path.display()
    );
    Ok(path)
}
