//! Output of checkpoint reports
//!
//! - **Visualization**: PNG/SVG figures using plotters
//! - **Export**: CSV tables of the same series
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Figures
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── figure.rs
//! │   ├── metrics.rs
//! │   └── sweep.rs
//! └── export/             ← Tables
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! Both sub-modules read through [`crate::series`], so a figure and a table made
//! from the same report always agree on the time axis.

pub mod visualization;
pub mod export;

pub use visualization::{
    plot_aggregate_metrics,
    plot_sweep_metrics,
    render_aggregate_metrics,
    render_sweep_metrics,
    PlotConfig,
};

pub use export::{
    export_metrics_csv,
    export_sweep_csv,
    CsvConfig,
    CsvMetadata,
};
