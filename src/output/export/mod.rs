//! Export of checkpoint series to CSV
//!
//! The tables hold the same series as the figures, one file per figure:
//!
//! | Function | Columns |
//! |----------|---------|
//! | [`export_metrics_csv`] | `time,total_energy,state_norm` |
//! | [`export_sweep_csv`] | `time,site{i}_energy,site{i}_norm,...` |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use solver_viz::output::export::{export_metrics_csv, export_sweep_csv, CsvConfig};
//! use solver_viz::series::SweepDirection;
//!
//! export_metrics_csv(&report, "metrics.csv", None)?;
//! export_sweep_csv(&report, SweepDirection::Forward, "forward.csv", Some(&CsvConfig::european()))?;
//! ```

pub mod csv;

pub use csv::{export_metrics_csv, export_sweep_csv, CsvConfig, CsvMetadata};
