//! Signal-level device interface.
//!
//! This module defines the `PeDevice` trait implemented by anything the testbench
//! can drive. It provides:
//! 1. **Clock and Reset:** Pin-level setters for `clk` and the active-low `rst_n`.
//! 2. **Stimulus:** Driving the data and control pins for the next edge.
//! 3. **Evaluation:** Settling combinational and sequential logic after a pin change.
//! 4. **Observation:** Reading the registered accumulator output.
//!
//! The behavioral [`ProcessingElement`](crate::core::pe::ProcessingElement) is the
//! stock implementor; an RTL co-simulation wrapper would implement the same trait.

use crate::core::pipeline::signals::PeInputs;

/// A processing element seen through its pins.
pub trait PeDevice {
    /// Drives the clock pin to `level`. Takes effect on the next `eval`.
    fn set_clk(&mut self, level: bool);

    /// Drives the active-low synchronous reset pin.
    fn set_rst_n(&mut self, level: bool);

    /// Drives the issue-valid pin, leaving every other input unchanged.
    fn set_valid_in(&mut self, valid: bool);

    /// Drives every data and control pin from a stimulus vector.
    fn apply(&mut self, inputs: &PeInputs);

    /// Settles the device after pin changes; a low-to-high `clk` transition
    /// since the previous call is a rising edge.
    fn eval(&mut self);

    /// Registered accumulator value.
    fn partial_sum_out(&self) -> i64;
}
