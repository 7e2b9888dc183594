//! Error definitions.
//!
//! The device model and clock driver are infallible; errors only arise while
//! setting a run up. This module provides:
//! 1. **Setup Errors:** Reading and parsing configuration or scenario files.
//! 2. **Validation Errors:** Rejecting scenario suites that cannot be driven.
//! 3. **Output Errors:** Failing to write the report.
//!
//! Output mismatches are not errors: they are recorded as failed test cases.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or scenarios.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read from disk.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document did not match the expected schema.
    #[error("invalid {what} document: {source}")]
    Parse {
        /// Kind of document being parsed (`"config"` or `"scenario"`).
        what: &'static str,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A scenario has no steps to drive.
    #[error("scenario '{0}' has no stimulus steps")]
    EmptyScenario(String),

    /// A scenario step asks for zero clock cycles.
    #[error("scenario '{scenario}' step {step} holds its stimulus for zero cycles")]
    ZeroCycleStep {
        /// Name of the offending scenario.
        scenario: String,
        /// Zero-based index of the offending step.
        step: usize,
    },

    /// A scenario suite contains no scenarios.
    #[error("scenario suite is empty")]
    EmptySuite,

    /// The report could not be written to its sink.
    #[error("could not write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias used by fallible setup paths.
pub type Result<T> = std::result::Result<T, SimError>;
