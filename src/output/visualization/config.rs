//! Plot configuration shared by the aggregate and sweep figures
//!
//! The command-line tool always uses the presets below; library callers may pass
//! their own `PlotConfig` to the `plot_*` functions.

use plotters::prelude::*;

use crate::series::SweepDirection;

/// Height of one stacked panel in pixels (4 in at 100 dpi)
pub const PANEL_HEIGHT: u32 = 400;

/// Configuration for customizing figures
///
/// # Fields
///
/// - `width`, `height`: Image dimensions in pixels
/// - `title`: Figure title drawn above all panels
/// - `font_family`: Font of the figure title and panel captions
/// - `xlabel`: X-axis label of every panel
/// - `energy_color`, `norm_color`: Line colors of the energy and norm series
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to draw grid lines
///
/// # Example
///
/// ```rust,ignore
/// use solver_viz::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::aggregate();
/// config.energy_color = BLACK;
/// config.width = 1600;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1000)
    pub width: u32,

    /// Image height in pixels (default: 1200)
    pub height: u32,

    /// Figure title (default: "Time Evolution Metrics")
    pub title: String,

    /// Font family of the figure title and panel captions (default: "serif")
    pub font_family: String,

    /// Figure title font size (default: 32)
    pub title_font_size: f64,

    /// Panel title font size (default: 22)
    pub panel_font_size: f64,

    /// X-axis label (default: "Time")
    pub xlabel: String,

    /// Energy series color (default: BLUE)
    pub energy_color: RGBColor,

    /// Norm series color (default: RED)
    pub norm_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1200,
            title: "Time Evolution Metrics".to_string(),
            font_family: "serif".to_string(),
            title_font_size: 32.0,
            panel_font_size: 22.0,
            xlabel: "Time".to_string(),
            energy_color: BLUE,
            norm_color: RED,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Preset for `metrics.png`: two panels on a 1000×1200 canvas
    pub fn aggregate() -> Self {
        Self::default()
    }

    /// Preset for a sweep figure with `n_sites` stacked panels
    ///
    /// Height grows with the lattice: [`PANEL_HEIGHT`] pixels per site.
    pub fn sweep(direction: SweepDirection, n_sites: usize) -> Self {
        let n_sites = n_sites.max(1) as u32;
        Self {
            height: PANEL_HEIGHT.saturating_mul(n_sites),
            title: format!("{} Sweep Site Metrics", direction.label()),
            ..Self::default()
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
