//! Visualization of solver checkpoints
//!
//! This module renders checkpoint reports using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared figure configuration (`PlotConfig`)
//! - **figure**: Stacked-panel layout and drawing, backend dispatch
//! - **metrics**: Total energy and state norm vs time
//! - **sweep**: Per-site energy and norm vs time, one figure per sweep direction
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use solver_viz::output::visualization::{render_aggregate_metrics, render_sweep_metrics};
//! use solver_viz::series::SweepDirection;
//!
//! let report = solver_viz::report::load(checkpoint)?;
//! render_aggregate_metrics(&report, &plots)?;
//! render_sweep_metrics(&report, &plots, SweepDirection::Forward)?;
//! render_sweep_metrics(&report, &plots, SweepDirection::Backward)?;
//! ```
//!
//! # Which Function
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | `metrics.png` in a plots directory | `metrics` | `render_aggregate_metrics` |
//! | Aggregate figure at any path / SVG | `metrics` | `plot_aggregate_metrics` |
//! | `{forward,backward}_sweep_metrics.png` | `sweep` | `render_sweep_metrics` |
//! | Sweep figure at any path / SVG | `sweep` | `plot_sweep_metrics` |

pub mod config;
pub mod figure;
pub mod metrics;
pub mod sweep;

pub use config::PlotConfig;

pub use figure::{axis_range, stacked_panels};

pub use metrics::{plot_aggregate_metrics, render_aggregate_metrics, METRICS_FILE};

pub use sweep::{plot_sweep_metrics, render_sweep_metrics};
