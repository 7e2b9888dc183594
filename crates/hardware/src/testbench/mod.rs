//! Testbench: scenarios, runner, and reporting.
//!
//! This module drives the device model the way a bench drives silicon:
//! 1. **Scenarios:** Ordered stimulus with an expected output.
//! 2. **Runner:** Reset, stimulus, clock, sample, compare, record.
//! 3. **Reporter:** Per-case lines, a summary, and the all-passed notice.
//! 4. **Suite:** The built-in regression scenarios.

/// Console reporting.
pub mod report;

/// Scenario execution against a device.
pub mod runner;

/// Scenario, test case, and suite types.
pub mod scenario;

/// Built-in regression suite.
pub mod suite;

pub use report::Reporter;
pub use runner::ScenarioRunner;
pub use scenario::{Outcome, Scenario, ScenarioSuite, Step, TestCase};
