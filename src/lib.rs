//! racetally - repeated sampling of a flaky test binary
//!
//! Runs a test binary many times in a row and counts clean exits against
//! SIGABRT deaths, to estimate how often a scheduler-dependent race trips
//! an assertion.

pub mod config;
pub mod error;
pub mod runner;

pub use error::{RaceTallyError, Result};
