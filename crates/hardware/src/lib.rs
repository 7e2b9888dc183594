//! Processing-element simulator library.
//!
//! This crate implements a cycle-accurate behavioral model of a pipelined
//! multiply-accumulate processing element and the testbench that drives it:
//! 1. **Core:** Accumulator state, the three-stage MAC pipeline, and the pin-level device.
//! 2. **Simulation:** Clock driver, reset sequencer, and scenario loading.
//! 3. **Testbench:** Scenarios, the runner, the reporter, and the built-in suite.
//! 4. **Support:** Configuration, errors, constants, and run statistics.

/// Common types and constants (pipeline depth, exit codes, errors).
pub mod common;
/// Testbench configuration (defaults, JSON loading).
pub mod config;
/// Processing-element core (state, pipeline, device trait).
pub mod core;
/// Clock driver, reset sequencer, and scenario loader.
pub mod sim;
/// Run statistics.
pub mod stats;
/// Scenarios, runner, reporter, and built-in suite.
pub mod testbench;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Pin-level device trait driven by the testbench.
pub use crate::core::PeDevice;
/// Behavioral processing element.
pub use crate::core::ProcessingElement;
/// Aggregate pass/fail tally.
pub use crate::stats::RunSummary;
