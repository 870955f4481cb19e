//! The sampling loop.
//!
//! Runs the target `runs` times, strictly one after another, writes a
//! diagnostic line for every unexpected status as it happens and the
//! two-line summary once the loop is exhausted.

use super::launcher::Launcher;
use super::outcome::RunOutcome;
use super::tally::Tally;
use crate::error::Result;
use log::{debug, info, warn};
use std::io::Write;

pub struct RunLoop<L: Launcher> {
    launcher: L,
    runs: u64,
}

impl<L: Launcher> RunLoop<L> {
    pub fn new(launcher: L, runs: u64) -> Self {
        Self { launcher, runs }
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Execute every run and write diagnostics and the summary to `out`.
    ///
    /// A launch failure aborts the loop; nothing further is written.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Tally> {
        info!("Sampling {} {} times", self.launcher.description(), self.runs);

        let mut tally = Tally::default();
        for index in 0..self.runs {
            let termination = self.launcher.launch().await?;
            let outcome = RunOutcome::classify(termination);
            debug!("Run {}/{}: {:?} -> {:?}", index + 1, self.runs, termination, outcome);

            if let RunOutcome::Unexpected(code) = outcome {
                writeln!(out, "Run exited with unexpected code: {}", code)?;
            }
            tally.record(outcome);
        }

        debug_assert!(tally.is_complete(self.runs));
        if tally.unexpected > 0 {
            warn!(
                "{} of {} runs exited with an unexpected code and are not in the summary",
                tally.unexpected, self.runs
            );
        }
        info!(
            "Finished: {} successes, {} assertion failures, {} unexpected",
            tally.successes, tally.assertion_failures, tally.unexpected
        );

        tally.write_summary(out)?;
        out.flush()?;
        Ok(tally)
    }
}
