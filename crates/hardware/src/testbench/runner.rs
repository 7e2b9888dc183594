//! Scenario runner.
//!
//! Drives one long-lived device through a suite of scenarios. For each case it:
//! 1. **Resets** the device when the scenario asks for a clean baseline.
//! 2. **Applies** each step's stimulus and steps the clock for the step's cycle count.
//! 3. **Samples** `partial_sum_out` and compares it to the expectation by exact equality.
//! 4. **Records** the verdict and reports it immediately.
//!
//! A mismatch is never fatal: the remaining scenarios still run and the failure
//! shows up in the summary.

use std::io::Write;

use tracing::{info, warn};

use crate::common::error::Result;
use crate::core::device::PeDevice;
use crate::sim::driver::{self, RESET_CYCLES};
use crate::stats::RunSummary;
use crate::testbench::report::Reporter;
use crate::testbench::scenario::{Outcome, Scenario, ScenarioSuite, TestCase};

/// Runs scenarios against a borrowed device.
///
/// The runner has exclusive access to the device for its lifetime; cases run
/// strictly one after another and share whatever state the previous case left.
#[derive(Debug)]
pub struct ScenarioRunner<'d, D: PeDevice + ?Sized, W: Write> {
    device: &'d mut D,
    reporter: Reporter<W>,
    banner: Option<String>,
}

impl<'d, D: PeDevice + ?Sized, W: Write> ScenarioRunner<'d, D, W> {
    /// Creates a runner driving `device` and reporting to `out`.
    pub const fn new(device: &'d mut D, out: W) -> Self {
        Self {
            device,
            reporter: Reporter::new(out),
            banner: None,
        }
    }

    /// Prints a banner with `title` before the first case.
    #[must_use]
    pub fn with_banner(mut self, title: impl Into<String>) -> Self {
        self.banner = Some(title.into());
        self
    }

    /// Executes one scenario and returns the finished case.
    ///
    /// Returns the number of clock edges driven alongside the case.
    pub fn run_case(&mut self, scenario: &Scenario) -> (TestCase, u64) {
        let mut case = TestCase::new(scenario.clone());
        let mut cycles = 0;

        if scenario.reset {
            driver::reset(&mut *self.device);
            cycles += RESET_CYCLES;
        }

        for step in &scenario.steps {
            self.device.apply(&step.inputs);
            for _ in 0..step.cycles {
                driver::step_cycle(&mut *self.device);
            }
            cycles += u64::from(step.cycles);
        }

        let observed = self.device.partial_sum_out();
        if case.record(observed) == Outcome::Fail {
            warn!(
                scenario = %scenario.name,
                expected = scenario.expected,
                observed,
                "output mismatch"
            );
        }
        (case, cycles)
    }

    /// Validates and runs every scenario in `suite`, then writes the summary.
    ///
    /// # Errors
    ///
    /// Returns a validation error before any cycle is driven if the suite is
    /// malformed, or [`SimError::Output`](crate::common::error::SimError::Output)
    /// if the report cannot be written.
    pub fn run_suite(&mut self, suite: &ScenarioSuite) -> Result<RunSummary> {
        suite.validate()?;

        if let Some(title) = &self.banner {
            self.reporter.banner(title)?;
        }

        let mut summary = RunSummary::new();
        for (index, scenario) in suite.scenarios.iter().enumerate() {
            info!(scenario = %scenario.name, reset = scenario.reset, "running scenario");
            self.reporter.case_started(index + 1, &scenario.name)?;

            let (case, cycles) = self.run_case(scenario);
            summary.add_cycles(cycles);
            summary.record(&case);
            self.reporter.case_finished(&case)?;
        }

        info!(
            passed = summary.passed,
            failed = summary.failed,
            cycles = summary.cycles,
            "suite finished"
        );
        self.reporter.summary(&summary)?;
        Ok(summary)
    }

    /// Consumes the runner and returns the report sink.
    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }
}
