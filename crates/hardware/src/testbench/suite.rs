//! Built-in regression suite.
//!
//! The five scenarios run when no scenario file is given. They exercise reset,
//! a plain multiply, accumulation across a flushed cycle, clear, and
//! partial-sum injection into an in-flight product.

use crate::common::constants::PIPELINE_LATENCY;
use crate::core::pipeline::signals::PeInputs;
use crate::testbench::scenario::{Scenario, ScenarioSuite};

const LATENCY: u32 = PIPELINE_LATENCY as u32;

/// Reset, then idle through a full pipeline latency.
pub fn reset_scenario() -> Scenario {
    Scenario::new("Reset", 0).step(PeInputs::idle(), LATENCY)
}

/// `5 * 3 = 15` with accumulation disabled.
pub fn multiply_scenario() -> Scenario {
    Scenario::new("5 * 3 = 15", 15).step(PeInputs::mac(5, 3), LATENCY)
}

/// `10*2 + 20*3 = 80`: overwrite, one flushed cycle, then accumulate.
pub fn accumulate_scenario() -> Scenario {
    let first = PeInputs::mac(10, 2);
    Scenario::new("10*2 + 20*3 = 80", 80)
        .step(first, LATENCY)
        .step(first.flush(), 1)
        .step(PeInputs::mac(20, 3).accumulate(), LATENCY)
}

/// Clears whatever the previous scenario accumulated; no reset.
///
/// The operands and `accumulate_en` from the previous scenario stay on the
/// pins, as they would on a real bench.
pub fn clear_scenario() -> Scenario {
    let held = PeInputs::mac(20, 3).accumulate().flush();
    Scenario::new("Clear accumulator", 0)
        .without_reset()
        .step(held.clear(), 1)
        .step(held, LATENCY - 1)
}

/// `100 + 5*3 = 115`: partial sum injected as the first product completes.
pub fn partial_sum_scenario() -> Scenario {
    let op = PeInputs::mac(5, 3);
    Scenario::new("100 + 5*3 = 115", 115)
        .step(op, LATENCY - 1)
        .step(op.with_partial_sum(100), 1)
}

/// All built-in scenarios in execution order.
///
/// Order matters: the clear scenario relies on the accumulator left by the
/// accumulation scenario.
pub fn builtin() -> ScenarioSuite {
    ScenarioSuite::new(vec![
        reset_scenario(),
        multiply_scenario(),
        accumulate_scenario(),
        clear_scenario(),
        partial_sum_scenario(),
    ])
}
