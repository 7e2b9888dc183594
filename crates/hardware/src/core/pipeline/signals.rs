//! Processing-element input signals and captured control.
//!
//! This module defines the signals that drive the multiply-accumulate pipeline. It provides:
//! 1. **Stimulus Vector:** One cycle's full assignment of the PE's data and control inputs.
//! 2. **Control Signals:** The subset of control flags latched into a record at issue time.
//!
//! The clock and reset pins are not part of the stimulus vector; the clock driver
//! and reset sequencer own them.

/// One cycle's full input assignment for the processing element.
///
/// Consumed by the device at the next rising clock edge. `Default` is all zero
/// and deasserted, the same as [`PeInputs::idle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeInputs {
    /// Data (activation) operand.
    pub data_in: i32,
    /// Weight operand.
    pub weight_in: i32,
    /// Externally supplied partial sum, sampled when an operation completes.
    pub partial_sum_in: i64,
    /// Issue-valid: a new operation enters stage 1 this cycle.
    pub valid_in: bool,
    /// Add the product to the accumulator instead of overwriting it.
    pub accumulate_en: bool,
    /// Zero the accumulator when this cycle's record reaches the final stage.
    pub clear_acc: bool,
    /// Seed the completing product with `partial_sum_in`.
    pub use_partial_sum: bool,
}

impl PeInputs {
    /// All inputs deasserted: no issue, no control.
    pub const fn idle() -> Self {
        Self {
            data_in: 0,
            weight_in: 0,
            partial_sum_in: 0,
            valid_in: false,
            accumulate_en: false,
            clear_acc: false,
            use_partial_sum: false,
        }
    }

    /// Issues a plain multiply of `data` by `weight`.
    pub const fn mac(data: i32, weight: i32) -> Self {
        Self {
            data_in: data,
            weight_in: weight,
            valid_in: true,
            ..Self::idle()
        }
    }

    /// Returns a copy with `accumulate_en` asserted.
    #[must_use]
    pub const fn accumulate(mut self) -> Self {
        self.accumulate_en = true;
        self
    }

    /// Returns a copy with `clear_acc` asserted.
    #[must_use]
    pub const fn clear(mut self) -> Self {
        self.clear_acc = true;
        self
    }

    /// Returns a copy injecting `partial_sum` into the completing operation.
    #[must_use]
    pub const fn with_partial_sum(mut self, partial_sum: i64) -> Self {
        self.partial_sum_in = partial_sum;
        self.use_partial_sum = true;
        self
    }

    /// Returns a copy with issue-valid deasserted, keeping operand and flag levels.
    #[must_use]
    pub const fn flush(mut self) -> Self {
        self.valid_in = false;
        self
    }

    /// Control flags latched into a record at issue time.
    pub const fn control(&self) -> ControlSignals {
        ControlSignals {
            accumulate_en: self.accumulate_en,
            clear_acc: self.clear_acc,
        }
    }
}

/// Control flags captured with an operation when it is issued.
///
/// `use_partial_sum` is deliberately absent: injection is sampled from the
/// live inputs on the edge the operation completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Accumulate into the held value.
    pub accumulate_en: bool,
    /// Zero the accumulator on completion.
    pub clear_acc: bool,
}
