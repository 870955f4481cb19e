//! Run loop module - repeated sampling of a test binary.
//!
//! This module provides the core sampling logic, including:
//! - Launcher for running the target once
//! - Termination and RunOutcome for classifying how a run ended
//! - Tally for the accumulated counts
//! - RunLoop for the sequential loop and its summary

mod launcher;
mod outcome;
mod run_loop;
mod tally;
mod termination;

pub use launcher::{Launcher, ProcessLauncher};
pub use outcome::RunOutcome;
pub use run_loop::RunLoop;
pub use tally::Tally;
pub use termination::{SIGABRT, Termination};
