//! solver-viz: charts for tensor-network time-evolution checkpoints
//!
//! The solver writes `solver_data.json` into its checkpoint directory: one record
//! per time step with the total energy, the state norm and per-site metrics of
//! the forward and backward sweeps. This crate loads that file and renders it.
//!
//! # Architecture
//!
//! 1. **Load**: [`report`] deserializes the checkpoint into [`SolverReport`]
//! 2. **Extract**: [`series`] turns the report into time-ordered `Vec<f64>`
//!    series and checks the sweep shapes
//! 3. **Output**: [`output`] draws the series with plotters or exports them to CSV
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use solver_viz::output::{render_aggregate_metrics, render_sweep_metrics};
//! use solver_viz::report;
//! use solver_viz::series::SweepDirection;
//!
//! # fn main() -> Result<(), solver_viz::ReportError> {
//! let report = report::load("runs/chain_8")?;
//!
//! render_aggregate_metrics(&report, "runs/chain_8/plots")?;
//! for direction in SweepDirection::ALL {
//!     render_sweep_metrics(&report, "runs/chain_8/plots", direction)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`report`]: Checkpoint data model and loading
//! - [`series`]: Series extraction and shape checks
//! - [`output`]: Figures (PNG/SVG) and CSV export
//! - [`cli`]: Command-line interface
//! - [`error`]: [`ReportError`]

pub mod error;
pub mod report;
pub mod series;

pub mod output;
pub mod cli;

pub use error::ReportError;
pub use report::SolverReport;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use solver_viz::prelude::*;
    //! ```
    pub use crate::error::ReportError;
    pub use crate::report::{load, SiteMetric, SolverReport, Step};
    pub use crate::series::{SiteSeries, SweepDirection};
    pub use crate::output::{
        plot_aggregate_metrics,
        plot_sweep_metrics,
        render_aggregate_metrics,
        render_sweep_metrics,
        PlotConfig,
    };
}
