//! Processing-element core.
//!
//! This module contains the device model under test: the MAC pipeline, the
//! accumulator state machine, and the pin-level interface the testbench drives.

/// Signal-level device trait.
pub mod device;

/// Accumulator state, edge transition, and behavioral device.
pub mod pe;

/// Three-stage MAC pipeline (records, signals, latch traits).
pub mod pipeline;

pub use self::device::PeDevice;
pub use self::pe::{PeState, ProcessingElement, advance};
pub use self::pipeline::signals::PeInputs;
