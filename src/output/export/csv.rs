//! CSV export of checkpoint series
//!
//! Writes the same series the figures show, for spreadsheets, pandas, gnuplot
//! and friends.
//!
//! # Quick Examples
//!
//! ## Aggregate metrics
//!
//! ```rust,ignore
//! use solver_viz::output::export::export_metrics_csv;
//!
//! export_metrics_csv(&report, "metrics.csv", None)?;
//! ```
//!
//! **Output** (`metrics.csv`):
//! ```csv
//! time,total_energy,state_norm
//! 0.000000,-1.500000,1.000000
//! 0.100000,-1.400000,0.990000
//! ```
//!
//! ## One sweep direction
//!
//! ```rust,ignore
//! use solver_viz::output::export::export_sweep_csv;
//! use solver_viz::series::SweepDirection;
//!
//! export_sweep_csv(&report, SweepDirection::Forward, "forward.csv", None)?;
//! ```
//!
//! **Output** (`forward.csv`, two sites):
//! ```csv
//! time,site0_energy,site0_norm,site1_energy,site1_norm
//! 0.000000,-0.500000,1.000000,-0.600000,1.000000
//! ```
//!
//! ## With metadata
//!
//! ```rust,ignore
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_report(&report));
//! export_metrics_csv(&report, "metrics.csv", Some(&config))?;
//! ```
//!
//! ```csv
//! # Solver Checkpoint Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Steps: 2
//! # Sites: 1
//! # dt: 0.1
//! #
//! time,total_energy,state_norm
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ReportError;
use crate::report::SolverReport;
use crate::series::{self, SweepDirection};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Semicolon-delimited with a decimal comma
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are `Some` end up in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Checkpoint directory or run name
    pub checkpoint: Option<String>,

    /// Number of recorded steps
    pub steps: Option<usize>,

    /// Lattice size
    pub sites: Option<usize>,

    /// Integration step reported by the solver
    pub dt: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing `report`
    pub fn from_report(report: &SolverReport) -> Self {
        Self {
            steps: Some(report.steps().len()),
            sites: Some(report.lattice_size()),
            dt: report.parameters().map(|p| p.dt),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Solver Checkpoint Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(checkpoint) = &metadata.checkpoint {
        writeln!(out, "# Checkpoint: {}", checkpoint)?;
    }
    if let Some(steps) = metadata.steps {
        writeln!(out, "# Steps: {}", steps)?;
    }
    if let Some(sites) = metadata.sites {
        writeln!(out, "# Sites: {}", sites)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(out, "# dt: {}", dt)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn check_finite(name: &str, values: &[f64]) -> Result<(), ReportError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(ReportError::schema(format!("NaN or Inf in {} at step {}", name, i))),
        None => Ok(()),
    }
}

/// Write a header row and one row per time point
///
/// `columns` are `(header, values)` pairs, each as long as `time_points`.
fn write_table(
    output_path: &Path,
    time_points: &[f64],
    columns: &[(String, Vec<f64>)],
    config: &CsvConfig,
) -> Result<(), ReportError> {
    let io_err = |e| ReportError::io(output_path, e);

    let file = File::create(output_path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut out, metadata).map_err(io_err)?;
        }
    }

    let mut header = String::from("time");
    for (name, _) in columns {
        header.push(config.delimiter);
        header.push_str(name);
    }
    writeln!(out, "{}", header).map_err(io_err)?;

    for (i, time) in time_points.iter().enumerate() {
        let mut row = format_number(*time, config);
        for (_, values) in columns {
            row.push(config.delimiter);
            row.push_str(&format_number(values[i], config));
        }
        writeln!(out, "{}", row).map_err(io_err)?;
    }

    out.flush().map_err(io_err)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export `time,total_energy,state_norm` to CSV
///
/// # Errors
///
/// - [`ReportError::Schema`] for an empty report or non-finite values
/// - [`ReportError::Io`] if the file cannot be written
pub fn export_metrics_csv(
    report: &SolverReport,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<(), ReportError> {
    if report.steps().is_empty() {
        return Err(ReportError::schema("time_evolution.steps is empty"));
    }

    let time_points = series::times(report);
    let columns = vec![
        ("total_energy".to_string(), series::total_energies(report)),
        ("state_norm".to_string(), series::state_norms(report)),
    ];

    check_finite("time", &time_points)?;
    for (name, values) in &columns {
        check_finite(name, values)?;
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    write_table(output_path.as_ref(), &time_points, &columns, configuration)
}

/// Export every site of one sweep direction to CSV
///
/// Columns: `time`, then `site{i}_energy`, `site{i}_norm` for each site.
///
/// # Errors
///
/// - [`ReportError::Schema`] for an empty or ragged sweep, or non-finite values
/// - [`ReportError::Io`] if the file cannot be written
pub fn export_sweep_csv(
    report: &SolverReport,
    direction: SweepDirection,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<(), ReportError> {
    let sites = series::sweep_series(report, direction)?;
    let time_points = series::times(report);

    check_finite("time", &time_points)?;

    let mut columns = Vec::with_capacity(sites.len() * 2);
    for site in sites {
        let energy = format!("site{}_energy", site.site);
        let norm = format!("site{}_norm", site.site);
        check_finite(&energy, &site.energies)?;
        check_finite(&norm, &site.norms)?;
        columns.push((energy, site.energies));
        columns.push((norm, site.norms));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    write_table(output_path.as_ref(), &time_points, &columns, configuration)
}

// =================================================================================================
// Tests
// =================================================================================================
