//! Stacked-panel figures
//!
//! Both output figures are a column of panels sharing the `time` series as
//! x-axis. [`stacked_panels`] always hands back a `Vec` of drawing areas, one per
//! panel, so a single-panel figure is indexed exactly like a multi-panel one.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::config::PlotConfig;
use crate::error::ReportError;

/// How a series is stroked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

/// One labelled series inside a panel
#[derive(Clone, Debug)]
pub struct Trace {
    pub label: String,
    pub values: Vec<f64>,
    pub color: RGBColor,
    pub stroke: Stroke,
}

impl Trace {
    pub fn solid(label: impl Into<String>, values: Vec<f64>, color: RGBColor) -> Self {
        Self { label: label.into(), values, color, stroke: Stroke::Solid }
    }

    pub fn dashed(label: impl Into<String>, values: Vec<f64>, color: RGBColor) -> Self {
        Self { label: label.into(), values, color, stroke: Stroke::Dashed }
    }
}

/// One chart of a figure
#[derive(Clone, Debug)]
pub struct Panel {
    pub title: String,
    pub ylabel: String,
    pub traces: Vec<Trace>,
}

/// Split `area` into `n_panels` equal rows, top to bottom
///
/// Always returns a collection, including for a single panel.
pub fn stacked_panels<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    n_panels: usize,
) -> Vec<DrawingArea<DB, Shift>> {
    area.split_evenly((n_panels, 1))
}

/// Widest axis span used when the data itself spans more than `f64::MAX`
const MAX_HALF_SPAN: f64 = f64::MAX / 4.0;

/// Axis range covering `values` with a 5% margin on each side
///
/// A flat series gets a small band around its value; an empty or non-finite
/// input falls back to `0..1`. The returned bounds and their difference are
/// always finite: near the ends of `f64` the margin is dropped, and data whose
/// span itself overflows gets a window of half the `f64` range around its
/// midpoint.
pub fn axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }

    // Scaled before subtracting so that `hi - lo` never has to be formed
    let pad = if hi > lo { hi * 0.05 - lo * 0.05 } else { lo.abs().max(1.0) * 0.05 };

    let padded = (lo - pad)..(hi + pad);
    if is_drawable(&padded) {
        return padded;
    }

    if hi > lo {
        let unpadded = lo..hi;
        if is_drawable(&unpadded) {
            return unpadded;
        }
        let mid = lo / 2.0 + hi / 2.0;
        return (mid - MAX_HALF_SPAN)..(mid + MAX_HALF_SPAN);
    }

    // Flat series at extreme magnitude: pad towards zero only
    if lo > 0.0 {
        (lo - 2.0 * pad)..lo
    } else {
        lo..(lo + 2.0 * pad)
    }
}

fn is_drawable(range: &Range<f64>) -> bool {
    range.start.is_finite()
        && range.end.is_finite()
        && (range.end - range.start).is_finite()
        && range.end > range.start
}

/// Render `panels` against `time_points` into `output_path`
///
/// `.svg` selects the SVG backend, anything else is written as a bitmap.
/// Callers validate their data first: the file is created as soon as the
/// backend is, and a half-drawn figure would otherwise be left behind.
pub fn render_figure(
    output_path: &Path,
    time_points: &[f64],
    panels: &[Panel],
    config: &PlotConfig,
) -> Result<(), ReportError> {
    if panels.is_empty() {
        return Err(ReportError::schema("figure has no panels"));
    }

    let ext = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let drawn = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            render_figure_impl(backend, time_points, panels, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            render_figure_impl(backend, time_points, panels, config)
        }
    };

    drawn.map_err(|e| ReportError::Render(format!("{}: {}", output_path.display(), e)))?;
    log::debug!("wrote {} ({} panels)", output_path.display(), panels.len());
    Ok(())
}

/// Implementation for figure rendering with concrete backend
fn render_figure_impl<DB: DrawingBackend>(
    backend: DB,
    time_points: &[f64],
    panels: &[Panel],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let body = root.titled(
        &config.title,
        (config.font_family.as_str(), config.title_font_size).into_font(),
    )?;

    let areas = stacked_panels(&body, panels.len());
    for (area, panel) in areas.iter().zip(panels) {
        draw_panel(area, time_points, panel, config)?;
    }

    root.present()?;
    Ok(())
}

/// Draw a single chart: caption, mesh, one line per trace, legend
fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    time_points: &[f64],
    panel: &Panel,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let x_range = axis_range(time_points.iter().copied());
    let y_range = axis_range(panel.traces.iter().flat_map(|t| t.values.iter().copied()));

    let (x_lo, x_hi) = (x_range.start, x_range.end);
    let (y_lo, y_hi) = (y_range.start, y_range.end);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (config.font_family.as_str(), config.panel_font_size).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    let tick_label = |v: &f64| format!("{:.3}", v);
    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.x_desc(config.xlabel.as_str())
        .y_desc(panel.ylabel.as_str())
        .x_label_formatter(&tick_label)
        .y_label_formatter(&tick_label)
        .draw()?;

    for trace in &panel.traces {
        let style = trace.color.stroke_width(config.line_width);
        // Points outside a clipped window are pinned to its edge
        let points = time_points
            .iter()
            .map(move |&t| t.clamp(x_lo, x_hi))
            .zip(trace.values.iter().map(move |&v| v.clamp(y_lo, y_hi)));

        match trace.stroke {
            Stroke::Solid => {
                chart
                    .draw_series(LineSeries::new(points, style))?
                    .label(trace.label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }
            Stroke::Dashed => {
                chart
                    .draw_series(DashedLineSeries::new(points, 10, 6, style))?
                    .label(trace.label.as_str())
                    .legend(move |(x, y)| {
                        EmptyElement::<(i32, i32), DB>::at((x, y))
                            + PathElement::new(vec![(0, 0), (8, 0)], style)
                            + PathElement::new(vec![(12, 0), (20, 0)], style)
                    });
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
