//! Console reporter.
//!
//! Writes the human-readable run log:
//! 1. **Banner:** Optional title block before the first case.
//! 2. **Per-case:** Name, expected and observed output, verdict; emitted as soon as the case finishes.
//! 3. **Summary:** Pass/fail counts, the names of failing cases, and an all-passed notice when nothing failed.
//!
//! The reporter writes to any [`Write`] sink so tests can capture the text.

use std::io::{self, Write};

use crate::stats::RunSummary;
use crate::testbench::scenario::TestCase;

const RULE: &str = "========================================";

/// Writes testbench results to a sink.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the title block.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the sink.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "  {title}")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out)
    }

    /// Announces case `number` (1-based) before it runs.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the sink.
    pub fn case_started(&mut self, number: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "Test {number}: {name}")
    }

    /// Writes the comparison and verdict of a finished case.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the sink.
    pub fn case_finished(&mut self, case: &TestCase) -> io::Result<()> {
        if let Some(observed) = case.observed() {
            writeln!(
                self.out,
                "  Expected: {}, Got: {observed}",
                case.expected()
            )?;
        }
        writeln!(self.out, "  {}", case.outcome())?;
        writeln!(self.out)
    }

    /// Writes the pass/fail counts, the failing case names, and, if nothing
    /// failed, the all-passed notice.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the sink.
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "  Results: {} passed, {} failed",
            summary.passed, summary.failed
        )?;
        for name in &summary.failures {
            writeln!(self.out, "    failed: {name}")?;
        }
        writeln!(self.out, "{RULE}")?;
        if summary.all_passed() {
            writeln!(self.out)?;
            writeln!(self.out, "  ALL TESTS PASSED!")?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    /// Consumes the reporter and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
