//! Time-ordered series extracted from a [`SolverReport`]
//!
//! All plotting and export goes through these helpers, so the x-axis of every
//! chart is exactly `steps[..].time` in file order and the shape checks live in
//! one place.

use crate::error::ReportError;
use crate::report::{SiteMetric, SolverReport, Step};

/// Direction of a sweep over the lattice sites
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SweepDirection {
    Forward,
    Backward,
}

impl SweepDirection {
    pub const ALL: [SweepDirection; 2] = [SweepDirection::Forward, SweepDirection::Backward];

    /// JSON key of the sweep array in a step record
    pub fn key(&self) -> &'static str {
        match self {
            SweepDirection::Forward => "forward_sweep",
            SweepDirection::Backward => "backward_sweep",
        }
    }

    /// Capitalised name used in figure titles
    pub fn label(&self) -> &'static str {
        match self {
            SweepDirection::Forward => "Forward",
            SweepDirection::Backward => "Backward",
        }
    }

    /// Output image name inside the plots directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SweepDirection::Forward => "forward_sweep_metrics.png",
            SweepDirection::Backward => "backward_sweep_metrics.png",
        }
    }

    /// The sweep array of `step` for this direction
    pub fn sites<'a>(&self, step: &'a Step) -> &'a [SiteMetric] {
        match self {
            SweepDirection::Forward => &step.forward_sweep,
            SweepDirection::Backward => &step.backward_sweep,
        }
    }
}

/// Energy and norm of one site across all steps
#[derive(Clone, Debug, PartialEq)]
pub struct SiteSeries {
    pub site: usize,
    pub energies: Vec<f64>,
    pub norms: Vec<f64>,
}

fn non_empty(report: &SolverReport) -> Result<&[Step], ReportError> {
    let steps = report.steps();
    if steps.is_empty() {
        return Err(ReportError::schema("time_evolution.steps is empty"));
    }
    Ok(steps)
}

/// Simulation time of every step, in file order
pub fn times(report: &SolverReport) -> Vec<f64> {
    report.steps().iter().map(|s| s.time).collect()
}

pub fn total_energies(report: &SolverReport) -> Vec<f64> {
    report.steps().iter().map(|s| s.total_energy).collect()
}

pub fn state_norms(report: &SolverReport) -> Vec<f64> {
    report.steps().iter().map(|s| s.state_norm).collect()
}

/// Site count `N` of a sweep, read from the first step
///
/// # Errors
///
/// [`ReportError::Schema`] if the run has no steps or the first sweep is empty.
pub fn site_count(report: &SolverReport, direction: SweepDirection) -> Result<usize, ReportError> {
    let steps = non_empty(report)?;
    let n_sites = direction.sites(&steps[0]).len();
    if n_sites == 0 {
        return Err(ReportError::schema(format!(
            "{} of step 0 has no sites",
            direction.key()
        )));
    }
    Ok(n_sites)
}

/// Series of a single site across all steps
///
/// # Errors
///
/// [`ReportError::Schema`] naming the first step whose sweep has no entry `site`.
pub fn site_series(
    report: &SolverReport,
    direction: SweepDirection,
    site: usize,
) -> Result<SiteSeries, ReportError> {
    let steps = non_empty(report)?;

    let mut energies = Vec::with_capacity(steps.len());
    let mut norms = Vec::with_capacity(steps.len());

    for (index, step) in steps.iter().enumerate() {
        let metric = direction.sites(step).get(site).ok_or_else(|| {
            ReportError::schema(format!(
                "{} of step {} has no site {} ({} sites recorded)",
                direction.key(),
                index,
                site,
                direction.sites(step).len()
            ))
        })?;
        energies.push(metric.energy);
        norms.push(metric.state_norm);
    }

    Ok(SiteSeries { site, energies, norms })
}

/// Series of every site of a sweep
///
/// Requires every step to carry exactly `N` sites, `N` taken from step 0.
///
/// # Errors
///
/// [`ReportError::Schema`] for an empty run, an empty first sweep or ragged sweeps.
pub fn sweep_series(
    report: &SolverReport,
    direction: SweepDirection,
) -> Result<Vec<SiteSeries>, ReportError> {
    let n_sites = site_count(report, direction)?;

    for (index, step) in report.steps().iter().enumerate() {
        let len = direction.sites(step).len();
        if len != n_sites {
            return Err(ReportError::schema(format!(
                "{} of step {} has {} sites, expected {}",
                direction.key(),
                index,
                len,
                n_sites
            )));
        }
    }

    (0..n_sites)
        .map(|site| site_series(report, direction, site))
        .collect()
}
