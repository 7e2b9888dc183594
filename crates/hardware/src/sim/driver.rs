//! Clock driver and reset sequencer.
//!
//! These two functions are the only code that touches the `clk` and `rst_n` pins:
//! 1. **Clock:** `step_cycle` produces exactly one rising edge per call.
//! 2. **Reset:** `reset` drives the device to a zero accumulator and an empty pipeline.

use crate::core::device::PeDevice;

/// Clock edges consumed by one call to [`reset`].
pub const RESET_CYCLES: u64 = 2;

/// Advances the device by one clock cycle.
///
/// Raises `clk` and settles, then lowers it and settles again. Exactly one
/// rising-edge update happens per call; outputs are stable between calls.
pub fn step_cycle<D: PeDevice + ?Sized>(device: &mut D) {
    device.set_clk(true);
    device.eval();
    device.set_clk(false);
    device.eval();
}

/// Drives the device to its reset state.
///
/// Asserts reset with issue-valid low for one cycle, then releases reset and
/// steps one more cycle. Afterwards the accumulator and output are zero and no
/// stage is valid. Calling it again yields the same state.
pub fn reset<D: PeDevice + ?Sized>(device: &mut D) {
    device.set_rst_n(false);
    device.set_valid_in(false);
    step_cycle(device);
    device.set_rst_n(true);
    step_cycle(device);
}
