//! Common utilities for integration tests
//!
//! Each test crate uses a different subset of these helpers.

#![allow(dead_code, unused_imports)]

pub mod checkpoints;
pub mod test_helpers;

// Re-export commonly used items
pub use checkpoints::{concrete_scenario, synthetic_checkpoint, write_checkpoint};
pub use test_helpers::{list_files, png_dimensions};
