//! Pipeline stage records and the MAC shift register.
//!
//! This module defines the state carried through the three-stage MAC pipeline:
//! Issue (stage 1) → Multiply (stage 2) → Accumulate (stage 3).
//!
//! 1. **Operation Records:** One tagged record per stage, valid or bubble.
//! 2. **Shift Register:** A fixed-depth array shifted one stage per rising edge.

use crate::common::constants::PIPELINE_DEPTH;
use crate::core::pipeline::signals::{ControlSignals, PeInputs};
use crate::core::pipeline::traits::PipelineLatch;

/// An in-flight multiply-accumulate operation.
///
/// A record with `valid == false` is a bubble left by a cycle with issue-valid
/// deasserted. Bubbles carry no product but still capture `clear_acc`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MacOp {
    /// Operation was issued with `valid_in` asserted.
    pub valid: bool,
    /// Data operand at issue (kept for tracing).
    pub data: i32,
    /// Weight operand at issue (kept for tracing).
    pub weight: i32,
    /// `data × weight`, computed at issue.
    pub product: i64,
    /// Control flags captured at issue.
    pub ctrl: ControlSignals,
}

impl MacOp {
    /// Builds the record entering stage 1 from this cycle's inputs.
    pub fn issue(inputs: &PeInputs) -> Self {
        if inputs.valid_in {
            Self {
                valid: true,
                data: inputs.data_in,
                weight: inputs.weight_in,
                product: i64::from(inputs.data_in).wrapping_mul(i64::from(inputs.weight_in)),
                ctrl: inputs.control(),
            }
        } else {
            Self::bubble(inputs.clear_acc)
        }
    }

    /// An invalid record, optionally carrying a clear.
    pub const fn bubble(clear_acc: bool) -> Self {
        Self {
            valid: false,
            data: 0,
            weight: 0,
            product: 0,
            ctrl: ControlSignals {
                accumulate_en: false,
                clear_acc,
            },
        }
    }

    /// `true` if this record has no effect on the accumulator.
    pub const fn is_inert(&self) -> bool {
        !self.valid && !self.ctrl.clear_acc
    }
}

/// Fixed-depth shift register of MAC records.
///
/// Index 0 is stage 1; the last index is the final (accumulate) stage.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MacPipeline {
    stages: [MacOp; PIPELINE_DEPTH],
}

impl MacPipeline {
    /// Creates an empty pipeline (all bubbles, no flags).
    pub fn new() -> Self {
        Self::default()
    }

    /// Shifts every record one stage forward and inserts `op` at stage 1.
    ///
    /// Returns the record that now occupies the final stage; the caller
    /// applies it to the accumulator on the same edge.
    pub fn shift_in(&mut self, op: MacOp) -> MacOp {
        self.stages.rotate_right(1);
        self.stages[0] = op;
        self.stages[PIPELINE_DEPTH - 1]
    }

    /// Returns the record in `stage` (1-based), or `None` if out of range.
    pub fn stage(&self, stage: usize) -> Option<&MacOp> {
        stage.checked_sub(1).and_then(|i| self.stages.get(i))
    }

    /// All stages, stage 1 first.
    pub const fn stages(&self) -> &[MacOp; PIPELINE_DEPTH] {
        &self.stages
    }

    /// Number of stages holding a valid operation.
    pub fn in_flight(&self) -> usize {
        self.stages.iter().filter(|op| op.valid).count()
    }
}

impl PipelineLatch for MacPipeline {
    fn flush(&mut self) {
        self.stages = [MacOp::default(); PIPELINE_DEPTH];
    }

    fn is_empty(&self) -> bool {
        self.stages.iter().all(|op| *op == MacOp::default())
    }

    fn has_valid(&self) -> bool {
        self.stages.iter().any(|op| op.valid)
    }
}
