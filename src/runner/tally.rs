//! Per-outcome counters for a sampling session.

use super::outcome::RunOutcome;
use std::io::Write;

/// Counts accumulated over a sampling session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub successes: u64,
    pub assertion_failures: u64,
    /// Runs reported as unexpected; not part of the printed summary
    pub unexpected: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: RunOutcome) {
        match outcome {
            RunOutcome::Success => self.successes += 1,
            RunOutcome::AssertionFailure => self.assertion_failures += 1,
            RunOutcome::Unexpected(_) => self.unexpected += 1,
        }
    }

    /// Number of runs recorded so far
    pub fn total(&self) -> u64 {
        self.successes + self.assertion_failures + self.unexpected
    }

    /// True once every one of `runs` runs has been recorded
    pub fn is_complete(&self, runs: u64) -> bool {
        self.total() == runs
    }

    /// Write the two-line summary
    pub fn write_summary<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Successes: {}", self.successes)?;
        writeln!(out, "Assertion failures: {}", self.assertion_failures)
    }
}
