//! Scenario suite loading.
//!
//! Reads a JSON scenario suite from disk and validates it before it reaches the
//! runner. A suite file looks like:
//!
//! ```json
//! {
//!   "scenarios": [
//!     {
//!       "name": "7 * 6 = 42",
//!       "steps": [{ "data_in": 7, "weight_in": 6, "valid_in": true, "cycles": 3 }],
//!       "expected": 42
//!     }
//!   ]
//! }
//! ```
//!
//! Omitted stimulus fields are zero or deasserted, `cycles` defaults to 1 and
//! `reset` defaults to `true`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::{Result, SimError};
use crate::testbench::scenario::ScenarioSuite;

/// Parses and validates a scenario suite from a JSON string.
///
/// # Errors
///
/// [`SimError::Parse`] for malformed JSON, or a validation error for a suite
/// that cannot be driven.
pub fn parse_suite(json: &str) -> Result<ScenarioSuite> {
    let suite: ScenarioSuite = serde_json::from_str(json).map_err(|source| SimError::Parse {
        what: "scenario",
        source,
    })?;
    suite.validate()?;
    Ok(suite)
}

/// Reads, parses, and validates a scenario suite file.
///
/// # Errors
///
/// [`SimError::Io`] if the file cannot be read, otherwise as [`parse_suite`].
pub fn load_suite(path: &Path) -> Result<ScenarioSuite> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let suite = parse_suite(&text)?;
    debug!(path = %path.display(), scenarios = suite.len(), "loaded scenario suite");
    Ok(suite)
}
