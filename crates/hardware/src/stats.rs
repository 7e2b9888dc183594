//! Run statistics.
//!
//! This module tallies the outcome of a testbench run. It tracks:
//! 1. **Verdicts:** Passed and failed case counts, updated as each case finishes.
//! 2. **Failures:** Names of the failing cases, in execution order.
//! 3. **Cycles:** Total clock edges driven, resets included.
//!
//! The summary only grows during a run and is read once at the end to pick the
//! process exit status.

use crate::common::constants::{EXIT_FAIL, EXIT_PASS};
use crate::testbench::scenario::{Outcome, TestCase};

/// Aggregate result of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cases whose observed output matched.
    pub passed: u64,
    /// Cases whose observed output differed.
    pub failed: u64,
    /// Clock edges driven across the run.
    pub cycles: u64,
    /// Names of failing cases.
    pub failures: Vec<String>,
}

impl RunSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished case. Pending cases are ignored.
    pub fn record(&mut self, case: &TestCase) {
        match case.outcome() {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail => {
                self.failed += 1;
                self.failures.push(case.name().to_owned());
            }
            Outcome::Pending => {}
        }
    }

    /// Adds `cycles` clock edges to the running total.
    pub const fn add_cycles(&mut self, cycles: u64) {
        self.cycles += cycles;
    }

    /// Number of finished cases.
    pub const fn total(&self) -> u64 {
        self.passed + self.failed
    }

    /// `true` if no case failed.
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run: 0 on success, 1 otherwise.
    pub const fn exit_code(&self) -> i32 {
        if self.all_passed() { EXIT_PASS } else { EXIT_FAIL }
    }
}
