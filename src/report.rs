//! Checkpoint data model
//!
//! The solver writes `solver_data.json` into its checkpoint directory while it
//! integrates. This module mirrors that file:
//!
//! ```text
//! {
//!   "time_evolution": {
//!     "parameters": { "time_step": 0.1, "num_steps": 2, "dt": 0.1 },
//!     "steps": [
//!       {
//!         "step": 0,
//!         "time": 0.0,
//!         "forward_sweep":  [ { "site": 0, "energy": -0.5, "state_norm": 1.0 } ],
//!         "backward_sweep": [ { "site": 0, "energy": -0.5, "state_norm": 1.0 } ],
//!         "total_energy": -1.5,
//!         "state_norm": 1.0,
//!         "state_file": "state_1.txt"
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! `parameters`, `site` and `state_file` are optional: older solver builds do
//! not emit them and nothing downstream depends on them. Unknown keys are ignored.
//!
//! # Example
//!
//! ```rust,ignore
//! use solver_viz::report;
//!
//! let report = report::load("runs/chain_8")?;
//! println!("{} steps", report.steps().len());
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Name of the checkpoint file inside a checkpoint directory
pub const SOLVER_DATA_FILE: &str = "solver_data.json";

// =================================================================================================
// Data model
// =================================================================================================

/// Whole content of `solver_data.json`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolverReport {
    pub time_evolution: TimeEvolution,
}

/// Time-evolution section: run parameters plus the ordered step records
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimeEvolution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<RunParameters>,

    /// Simulation order; defines the time axis of every chart
    pub steps: Vec<Step>,
}

/// Integration parameters the solver was started with
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    pub time_step: f64,
    pub num_steps: u64,
    pub dt: f64,
}

/// One time step of the evolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Step {
    /// Step index (not used for plotting)
    pub step: u64,

    /// Simulation time, the shared x-axis
    pub time: f64,

    pub total_energy: f64,
    pub state_norm: f64,

    /// One entry per lattice site, in site order
    pub forward_sweep: Vec<SiteMetric>,

    /// Same cardinality and ordering as `forward_sweep`
    pub backward_sweep: Vec<SiteMetric>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<String>,
}

/// Energy and norm measured at one site during a sweep
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteMetric {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<usize>,

    pub energy: f64,
    pub state_norm: f64,
}

impl SiteMetric {
    pub fn new(energy: f64, state_norm: f64) -> Self {
        Self { site: None, energy, state_norm }
    }
}

impl SolverReport {
    /// Parse a report held in memory
    ///
    /// # Errors
    ///
    /// - [`ReportError::Parse`] if `json` is not valid JSON
    /// - [`ReportError::Schema`] if a required field is missing or mistyped
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Step records in simulation order
    pub fn steps(&self) -> &[Step] {
        &self.time_evolution.steps
    }

    pub fn parameters(&self) -> Option<&RunParameters> {
        self.time_evolution.parameters.as_ref()
    }

    /// Site count of the first forward sweep, 0 for an empty run
    pub fn lattice_size(&self) -> usize {
        self.steps().first().map_or(0, |step| step.forward_sweep.len())
    }
}

// =================================================================================================
// Loading
// =================================================================================================

/// Path of the checkpoint file for a checkpoint directory
pub fn solver_data_path(checkpoint_dir: impl AsRef<Path>) -> PathBuf {
    checkpoint_dir.as_ref().join(SOLVER_DATA_FILE)
}

/// Load `<checkpoint_dir>/solver_data.json`
///
/// The whole file is read and parsed at once; the report is read-only afterwards.
///
/// # Errors
///
/// - [`ReportError::NotFound`] if the file does not exist
/// - [`ReportError::Io`] for any other read failure
/// - [`ReportError::Parse`] / [`ReportError::Schema`] as in [`SolverReport::from_json_str`]
pub fn load(checkpoint_dir: impl AsRef<Path>) -> Result<SolverReport, ReportError> {
    let path = solver_data_path(checkpoint_dir);

    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::NotFound { path: path.clone() },
        _ => ReportError::io(&path, e),
    })?;

    let report = SolverReport::from_json_str(&content)?;

    log::info!(
        "loaded {}: {} steps, {} sites",
        path.display(),
        report.steps().len(),
        report.lattice_size()
    );

    if let Some(parameters) = report.parameters() {
        log::debug!(
            "run parameters: time_step={} num_steps={} dt={}",
            parameters.time_step,
            parameters.num_steps,
            parameters.dt
        );

        let recorded = report.steps().len() as u64;
        if parameters.num_steps != recorded {
            log::warn!(
                "checkpoint declares {} steps but records {}; the run may have been interrupted",
                parameters.num_steps,
                recorded
            );
        }
    }

    Ok(report)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PRODUCER_OUTPUT: &str = r#"{
  "time_evolution": {
    "parameters": {
      "time_step": 0.1,
      "num_steps": 2,
      "dt": 0.1
    },
    "steps": [
      {
        "step": 0,
        "time": 0,
        "forward_sweep": [
          { "site": 0, "energy": -0.5, "state_norm": 1 },
          { "site": 1, "energy": -0.6, "state_norm": 1 }
        ],
        "backward_sweep": [
          { "site": 1, "energy": -0.55, "state_norm": 1 },
          { "site": 0, "energy": -0.5, "state_norm": 1 }
        ],
        "total_energy": -1.5,
        "state_norm": 1,
        "state_file": "state_1.txt"
      },
      {
        "step": 1,
        "time": 0.1,
        "forward_sweep": [
          { "site": 0, "energy": -0.4, "state_norm": 0.99 },
          { "site": 1, "energy": -0.45, "state_norm": 0.98 }
        ],
        "backward_sweep": [
          { "site": 1, "energy": -0.41, "state_norm": 0.99 },
          { "site": 0, "energy": -0.39, "state_norm": 0.97 }
        ],
        "total_energy": -1.4,
        "state_norm": 0.99,
        "state_file": "state_2.txt"
      }
    ]
  }
}"#;

    #[test]
    fn test_parse_full_producer_output() {
        let report = SolverReport::from_json_str(PRODUCER_OUTPUT).unwrap();

        assert_eq!(report.steps().len(), 2);
        assert_eq!(report.lattice_size(), 2);

        let params = report.parameters().unwrap();
        assert_eq!(params.num_steps, 2);
        assert_relative_eq!(params.dt, 0.1);

        let second = &report.steps()[1];
        assert_eq!(second.step, 1);
        assert_relative_eq!(second.time, 0.1);
        assert_relative_eq!(second.total_energy, -1.4);
        assert_eq!(second.state_file.as_deref(), Some("state_2.txt"));
        assert_eq!(second.backward_sweep[0].site, Some(1));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let json = r#"{"time_evolution": {"steps": [
            {"step": 0, "time": 0.0, "total_energy": -1.5, "state_norm": 1.0,
             "forward_sweep": [{"energy": -0.5, "state_norm": 1.0}],
             "backward_sweep": [{"energy": -0.5, "state_norm": 1.0}]}
        ]}}"#;

        let report = SolverReport::from_json_str(json).unwrap();
        assert!(report.parameters().is_none());
        assert!(report.steps()[0].state_file.is_none());
        assert_eq!(report.steps()[0].forward_sweep[0], SiteMetric::new(-0.5, 1.0));
    }

    #[test]
    fn test_integer_literals_read_as_floats() {
        // The solver prints whole numbers without a decimal point
        let report = SolverReport::from_json_str(PRODUCER_OUTPUT).unwrap();
        assert_relative_eq!(report.steps()[0].time, 0.0);
        assert_relative_eq!(report.steps()[0].state_norm, 1.0);
    }

    #[test]
    fn test_missing_total_energy_is_schema_error() {
        let json = PRODUCER_OUTPUT.replacen("\"total_energy\": -1.4,", "", 1);
        let err = SolverReport::from_json_str(&json).unwrap_err();
        assert!(matches!(err, ReportError::Schema(ref m) if m.contains("total_energy")));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = SolverReport::from_json_str("{\"time_evolution\": ").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        match err {
            ReportError::NotFound { path } => assert_eq!(path, dir.path().join(SOLVER_DATA_FILE)),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reads_checkpoint_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(solver_data_path(dir.path()), PRODUCER_OUTPUT).unwrap();

        let report = load(dir.path()).unwrap();
        assert_eq!(report.steps().len(), 2);
    }

    #[test]
    fn test_lattice_size_of_empty_run() {
        let report = SolverReport::from_json_str(r#"{"time_evolution": {"steps": []}}"#).unwrap();
        assert_eq!(report.lattice_size(), 0);
    }
}
