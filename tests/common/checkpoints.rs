//! Checkpoint fixtures for testing
//!
//! Each fixture is the JSON a solver run would leave in its checkpoint
//! directory, so the tests go through the real loading path.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

/// The two-step, one-site run used as the reference scenario
pub fn concrete_scenario() -> Value {
    json!({
        "time_evolution": {
            "steps": [
                {
                    "step": 0, "time": 0.0, "total_energy": -1.5, "state_norm": 1.0,
                    "forward_sweep": [{"energy": -0.5, "state_norm": 1.0}],
                    "backward_sweep": [{"energy": -0.5, "state_norm": 1.0}]
                },
                {
                    "step": 1, "time": 0.1, "total_energy": -1.4, "state_norm": 0.99,
                    "forward_sweep": [{"energy": -0.4, "state_norm": 0.99}],
                    "backward_sweep": [{"energy": -0.45, "state_norm": 0.995}]
                }
            ]
        }
    })
}

/// A run with `n_steps` steps of `n_sites` sites, in the full producer layout
///
/// Energies relax towards a ground state and norms decay slowly, which is
/// roughly what an imaginary-time run prints.
pub fn synthetic_checkpoint(n_steps: usize, n_sites: usize, dt: f64) -> Value {
    let steps: Vec<Value> = (0..n_steps)
        .map(|i| {
            let t = i as f64 * dt;
            let site = |s: usize, phase: f64| {
                json!({
                    "site": s,
                    "energy": -0.5 - 0.1 * s as f64 + 0.2 * (-t - phase).exp(),
                    "state_norm": (-0.01 * t).exp()
                })
            };
            let forward: Vec<Value> = (0..n_sites).map(|s| site(s, 0.0)).collect();
            let backward: Vec<Value> = (0..n_sites).rev().map(|s| site(s, 0.1)).collect();

            json!({
                "step": i,
                "time": t,
                "forward_sweep": forward,
                "backward_sweep": backward,
                "total_energy": -1.5 + 0.3 * (-t).exp(),
                "state_norm": (-0.01 * t).exp(),
                "state_file": format!("state_{}.txt", i + 1)
            })
        })
        .collect();

    json!({
        "time_evolution": {
            "parameters": { "time_step": dt, "num_steps": n_steps, "dt": dt },
            "steps": steps
        }
    })
}

/// Write `data` as `<dir>/solver_data.json`
pub fn write_checkpoint(dir: &Path, data: &Value) {
    let text = serde_json::to_string_pretty(data).unwrap();
    fs::write(dir.join("solver_data.json"), text).unwrap();
}
