//! Common types and constants used throughout the processing-element simulator.
//!
//! This module provides the building blocks shared by the device model and the
//! testbench:
//! 1. **Constants:** Pipeline depth, latency, reset values, and exit codes.
//! 2. **Error Handling:** Setup errors for configuration and scenario loading.

/// Device and harness constants.
pub mod constants;

/// Error types for run setup.
pub mod error;

pub use constants::{PIPELINE_DEPTH, PIPELINE_LATENCY};
pub use error::{Result, SimError};
