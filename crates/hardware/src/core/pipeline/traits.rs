//! Pipeline latch interface.
//!
//! Standardizes flushing and status checks for inter-stage buffers.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold operations as they move between stages. They support
/// flushing and status checks.
pub trait PipelineLatch {
    /// Clears all entries in the latch.
    ///
    /// Called on a synchronous reset.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if every entry is a bubble with no captured control.
    fn is_empty(&self) -> bool;

    /// Checks if the latch holds any valid operation.
    fn has_valid(&self) -> bool;
}
