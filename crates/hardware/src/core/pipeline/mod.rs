//! Multiply-accumulate pipeline.
//!
//! This module contains the three-stage MAC pipeline of the processing element:
//! 1. **Latches:** Stage records and the fixed-depth shift register.
//! 2. **Signals:** The per-cycle stimulus vector and the control captured at issue.
//! 3. **Traits:** Common interface for pipeline latches.

/// Stage records and the MAC shift register.
pub mod latches;

/// Input signals and captured control flags.
pub mod signals;

/// Traits for pipeline latch components.
pub mod traits;
