//! Behavioral processing element.
//!
//! This module implements the clocked state machine of a single MAC tile. It provides:
//! 1. **State:** The accumulator register and the three pipeline stages as one owned record.
//! 2. **Transition:** A pure `advance` function computing the state after one rising edge.
//! 3. **Device:** A pin-level wrapper that detects clock edges and implements [`PeDevice`].
//!
//! # Completion rules
//!
//! When a record enters the final stage it is applied to the accumulator:
//!
//! | Record                 | Live inputs        | Accumulator             |
//! |------------------------|--------------------|-------------------------|
//! | `clear_acc` captured   | any                | `0`                     |
//! | bubble                 | any                | unchanged               |
//! | valid                  | `use_partial_sum`  | `partial_sum_in + product` |
//! | valid, `accumulate_en` | -                  | `acc + product`         |
//! | valid                  | -                  | `product`               |

use tracing::debug;

use crate::common::constants::ACCUMULATOR_RESET;
use crate::core::device::PeDevice;
use crate::core::pipeline::latches::{MacOp, MacPipeline};
use crate::core::pipeline::signals::PeInputs;
use crate::core::pipeline::traits::PipelineLatch;

/// Architectural state of the processing element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeState {
    /// Accumulator register, driven onto `partial_sum_out`.
    pub accumulator: i64,
    /// In-flight operations, stage 1 first.
    pub pipeline: MacPipeline,
}

impl PeState {
    /// The state immediately after a synchronous reset.
    pub fn reset() -> Self {
        Self {
            accumulator: ACCUMULATOR_RESET,
            pipeline: MacPipeline::new(),
        }
    }

    /// `true` if the accumulator is zero and no stage holds a valid operation.
    ///
    /// A bubble carrying `clear_acc` may still be in flight: the reset sequencer
    /// leaves that pin alone, and a clear landing on a zero accumulator is a no-op.
    pub fn is_reset(&self) -> bool {
        self.accumulator == ACCUMULATOR_RESET && !self.pipeline.has_valid()
    }
}

/// Computes the state after one rising clock edge.
///
/// `rst_n` is the level of the active-low reset pin at the edge. Pure: the same
/// `(state, inputs, rst_n)` always produces the same result.
pub fn advance(state: &PeState, inputs: &PeInputs, rst_n: bool) -> PeState {
    let mut next = *state;
    if !rst_n {
        next.pipeline.flush();
        next.accumulator = ACCUMULATOR_RESET;
        return next;
    }

    let completing = next.pipeline.shift_in(MacOp::issue(inputs));
    next.accumulator = complete(state.accumulator, &completing, inputs);
    next
}

/// Applies a record entering the final stage to the accumulator.
fn complete(accumulator: i64, op: &MacOp, inputs: &PeInputs) -> i64 {
    if op.ctrl.clear_acc {
        ACCUMULATOR_RESET
    } else if !op.valid {
        accumulator
    } else if inputs.use_partial_sum {
        inputs.partial_sum_in.wrapping_add(op.product)
    } else if op.ctrl.accumulate_en {
        accumulator.wrapping_add(op.product)
    } else {
        op.product
    }
}

/// Pin-level behavioral model of the processing element.
///
/// Pins power up with `clk` and `rst_n` low and every input deasserted, like an
/// RTL model before its first evaluation.
#[derive(Debug, Clone, Default)]
pub struct ProcessingElement {
    clk: bool,
    rst_n: bool,
    inputs: PeInputs,
    /// Clock level seen by the previous `eval`, for edge detection.
    last_clk: bool,
    state: PeState,
    /// Rising edges observed since construction.
    edges: u64,
    trace: bool,
}

impl ProcessingElement {
    /// Creates a device with all pins low and a cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables per-edge `debug!` tracing of stage contents.
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Current architectural state.
    pub const fn state(&self) -> &PeState {
        &self.state
    }

    /// Inputs currently driven on the pins.
    pub const fn inputs(&self) -> &PeInputs {
        &self.inputs
    }

    /// Rising edges observed since construction.
    pub const fn edges(&self) -> u64 {
        self.edges
    }

    fn trace_edge(&self) {
        let [s1, s2, s3] = self.state.pipeline.stages();
        debug!(
            edge = self.edges,
            rst_n = self.rst_n,
            s1_valid = s1.valid,
            s1 = s1.product,
            s2_valid = s2.valid,
            s2 = s2.product,
            s3_valid = s3.valid,
            s3 = s3.product,
            acc = self.state.accumulator,
            "posedge"
        );
    }
}

impl PeDevice for ProcessingElement {
    fn set_clk(&mut self, level: bool) {
        self.clk = level;
    }

    fn set_rst_n(&mut self, level: bool) {
        self.rst_n = level;
    }

    fn set_valid_in(&mut self, valid: bool) {
        self.inputs.valid_in = valid;
    }

    fn apply(&mut self, inputs: &PeInputs) {
        self.inputs = *inputs;
    }

    fn eval(&mut self) {
        let rising = self.clk && !self.last_clk;
        self.last_clk = self.clk;
        if rising {
            self.state = advance(&self.state, &self.inputs, self.rst_n);
            self.edges += 1;
            if self.trace {
                self.trace_edge();
            }
        }
    }

    fn partial_sum_out(&self) -> i64 {
        self.state.accumulator
    }
}
