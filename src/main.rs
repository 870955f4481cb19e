use clap::Parser;
use colored::*;
use eyre::{Result, WrapErr};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use racetally::config::Config;
use racetally::runner::{ProcessLauncher, RunLoop};

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    // Logs go to a file; stdout carries only the sampling results
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("racetally")
        .join("logs");

    fs::create_dir_all(&log_dir).wrap_err("Failed to create log directory")?;

    let log_file = log_dir.join("racetally.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .wrap_err("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Log to stderr when the log file is unavailable; the run itself must not fail
fn setup_fallback_logging(err: &eyre::Report) {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();
    warn!("File logging unavailable, logging to stderr: {:#}", err);
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    let run_loop = RunLoop::new(ProcessLauncher::new(&config.binary), config.runs);

    if cli.is_verbose() {
        eprintln!(
            "{} {} x{}",
            "Sampling".cyan(),
            run_loop.launcher().binary().display().to_string().bold(),
            run_loop.runs()
        );
    }

    let mut stdout = std::io::stdout().lock();
    let tally = run_loop.run(&mut stdout).await.wrap_err("Sampling failed")?;

    if cli.is_verbose() && tally.unexpected > 0 {
        eprintln!(
            "{} {} runs exited with an unexpected code",
            "Warning:".yellow(),
            tally.unexpected
        );
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Setup logging first
    if let Err(err) = setup_logging().wrap_err("Failed to setup logging") {
        setup_fallback_logging(&err);
    }

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref())
        .and_then(|config| config.with_overrides(cli.runs, cli.binary.clone()))
        .wrap_err("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).await.wrap_err("Application failed")?;

    Ok(())
}
