//! Simulation drivers and scenario loading.
//!
//! Provides the clock driver and reset sequencer that advance a device, and
//! utilities for loading scenario suites from disk.

/// Clock stepping and reset sequencing.
pub mod driver;

/// Scenario suite loading from JSON files.
pub mod loader;

pub use driver::{reset, step_cycle};
