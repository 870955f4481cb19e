// Launching the target binary and collecting its termination status

use super::termination::Termination;
use crate::error::{RaceTallyError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Something that can be run once and reports how it ended
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Run the target to completion
    async fn launch(&self) -> Result<Termination>;

    /// Human-readable name of the target, for logs
    fn description(&self) -> String;
}

/// Launches an executable as a child process.
///
/// The child inherits the environment and stdin; its stdout and stderr are
/// piped, drained and thrown away.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    binary: PathBuf,
    args: Vec<String>,
}

impl ProcessLauncher {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument passed to every run
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&self) -> Result<Termination> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(&self.args);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|source| RaceTallyError::Launch {
            binary: self.binary.clone(),
            source,
        })?;

        // Drain both pipes so a chatty target never blocks on a full buffer
        let output = child.wait_with_output().await?;
        log::trace!(
            "{} wrote {} bytes to stdout, {} bytes to stderr",
            self.binary.display(),
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(Termination::from_status(output.status))
    }

    fn description(&self) -> String {
        self.binary.display().to_string()
    }
}
