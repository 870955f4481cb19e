//! CLI module for racetally - command-line interface.
//!
//! Provides the argument parser; all flags are optional and the defaults
//! reproduce a plain 1000-run sample of `./test`.

pub mod commands;

pub use commands::Cli;
