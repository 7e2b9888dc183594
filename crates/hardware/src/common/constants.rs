//! Global Device Constants.
//!
//! This module defines the fixed parameters of the processing element. It includes:
//! 1. **Pipeline Constants:** Depth of the MAC pipeline and its observable latency.
//! 2. **Reset Constants:** Values every register takes after a synchronous reset.
//! 3. **Harness Constants:** Exit codes reported to the shell.

/// Number of pipeline stages between issue and the accumulator.
///
/// Stage 3 is the final stage: a record is applied to the accumulator on the
/// same edge it enters stage 3.
pub const PIPELINE_DEPTH: usize = 3;

/// Clock edges between issuing an operation and observing it on `partial_sum_out`.
pub const PIPELINE_LATENCY: u64 = PIPELINE_DEPTH as u64;

/// Accumulator value after reset or a clear.
pub const ACCUMULATOR_RESET: i64 = 0;

/// Process exit status when every scenario passed.
pub const EXIT_PASS: i32 = 0;

/// Process exit status when at least one scenario failed.
pub const EXIT_FAIL: i32 = 1;

/// Process exit status when the run could not start (bad config or scenario file).
pub const EXIT_SETUP_ERROR: i32 = 2;
