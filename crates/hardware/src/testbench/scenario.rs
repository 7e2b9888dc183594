//! Scenarios and test cases.
//!
//! This module defines what the runner executes. It provides:
//! 1. **Steps:** A stimulus vector held on the pins for a number of clock cycles.
//! 2. **Scenarios:** Named, ordered step sequences with an expected output.
//! 3. **Test Cases:** A scenario paired with its observed output and outcome.
//! 4. **Suites:** Ordered scenario collections, validated before any cycle is driven.

use std::fmt;

use serde::Deserialize;

use crate::common::error::{Result, SimError};
use crate::core::pipeline::signals::PeInputs;

/// A stimulus vector driven for `cycles` consecutive clock edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "StepRecord")]
pub struct Step {
    /// Pin assignment held for the whole step.
    pub inputs: PeInputs,
    /// Clock cycles to step after applying `inputs`.
    pub cycles: u32,
}

impl Step {
    /// Holds `inputs` for `cycles` clock edges.
    pub const fn new(inputs: PeInputs, cycles: u32) -> Self {
        Self { inputs, cycles }
    }
}

/// On-disk form of a [`Step`]: every pin next to `cycles`, misspelled keys rejected.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StepRecord {
    data_in: i32,
    weight_in: i32,
    partial_sum_in: i64,
    valid_in: bool,
    accumulate_en: bool,
    clear_acc: bool,
    use_partial_sum: bool,
    cycles: u32,
}

impl Default for StepRecord {
    fn default() -> Self {
        Self {
            data_in: 0,
            weight_in: 0,
            partial_sum_in: 0,
            valid_in: false,
            accumulate_en: false,
            clear_acc: false,
            use_partial_sum: false,
            cycles: 1,
        }
    }
}

impl From<StepRecord> for Step {
    fn from(r: StepRecord) -> Self {
        let inputs = PeInputs {
            data_in: r.data_in,
            weight_in: r.weight_in,
            partial_sum_in: r.partial_sum_in,
            valid_in: r.valid_in,
            accumulate_en: r.accumulate_en,
            clear_acc: r.clear_acc,
            use_partial_sum: r.use_partial_sum,
        };
        Self::new(inputs, r.cycles)
    }
}

/// A named stimulus sequence and the output expected at its end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Human-readable name, printed in the report.
    pub name: String,
    /// Reset the device before the first step.
    #[serde(default = "Scenario::default_reset")]
    pub reset: bool,
    /// Ordered stimulus.
    pub steps: Vec<Step>,
    /// Expected `partial_sum_out` after the last step.
    pub expected: i64,
}

impl Scenario {
    const fn default_reset() -> bool {
        true
    }

    /// Starts a scenario that resets the device first.
    pub fn new(name: impl Into<String>, expected: i64) -> Self {
        Self {
            name: name.into(),
            reset: true,
            steps: Vec::new(),
            expected,
        }
    }

    /// Runs against whatever state the previous scenario left behind.
    #[must_use]
    pub const fn without_reset(mut self) -> Self {
        self.reset = false;
        self
    }

    /// Appends a step holding `inputs` for `cycles` edges.
    #[must_use]
    pub fn step(mut self, inputs: PeInputs, cycles: u32) -> Self {
        self.steps.push(Step::new(inputs, cycles));
        self
    }

    /// Total clock edges driven by the steps (reset excluded).
    pub fn cycles(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.cycles)).sum()
    }

    /// Checks that the scenario can be driven.
    ///
    /// # Errors
    ///
    /// [`SimError::EmptyScenario`] if there are no steps and
    /// [`SimError::ZeroCycleStep`] if a step holds for zero cycles.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(SimError::EmptyScenario(self.name.clone()));
        }
        if let Some(step) = self.steps.iter().position(|s| s.cycles == 0) {
            return Err(SimError::ZeroCycleStep {
                scenario: self.name.clone(),
                step,
            });
        }
        Ok(())
    }
}

/// Verdict of a test case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Not yet executed.
    #[default]
    Pending,
    /// Observed output equals the expectation.
    Pass,
    /// Observed output differs from the expectation.
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

/// One execution of a scenario.
///
/// Created pending, records its observed output exactly once, and is never reused.
#[derive(Clone, Debug)]
pub struct TestCase {
    scenario: Scenario,
    observed: Option<i64>,
    outcome: Outcome,
}

impl TestCase {
    /// Creates a pending case for `scenario`.
    pub const fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            observed: None,
            outcome: Outcome::Pending,
        }
    }

    /// Scenario being executed.
    pub const fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Scenario name.
    pub fn name(&self) -> &str {
        &self.scenario.name
    }

    /// Expected output.
    pub const fn expected(&self) -> i64 {
        self.scenario.expected
    }

    /// Observed output, once recorded.
    pub const fn observed(&self) -> Option<i64> {
        self.observed
    }

    /// Current verdict.
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Records the sampled output and finalizes the verdict by exact equality.
    ///
    /// A case that already has a verdict keeps it.
    pub fn record(&mut self, observed: i64) -> Outcome {
        if self.outcome == Outcome::Pending {
            self.observed = Some(observed);
            self.outcome = if observed == self.scenario.expected {
                Outcome::Pass
            } else {
                Outcome::Fail
            };
        }
        self.outcome
    }
}

/// Ordered collection of scenarios, run against one device.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSuite {
    /// Scenarios in execution order.
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSuite {
    /// Wraps an ordered scenario list.
    pub const fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Validates every scenario.
    ///
    /// # Errors
    ///
    /// [`SimError::EmptySuite`] for an empty suite, or the first scenario error.
    pub fn validate(&self) -> Result<()> {
        if self.scenarios.is_empty() {
            return Err(SimError::EmptySuite);
        }
        self.scenarios.iter().try_for_each(Scenario::validate)
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// `true` if there are no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
