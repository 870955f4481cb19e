//! CLI definition using clap.

use clap::Parser;
use std::path::PathBuf;

/// racetally - run a test binary repeatedly and count assertion failures
#[derive(Parser, Debug)]
#[command(name = "racetally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output (on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of runs (overrides config, default 1000)
    #[arg(short = 'n', long)]
    pub runs: Option<u64>,

    /// Test binary to run (overrides config, default ./test)
    pub binary: Option<PathBuf>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
