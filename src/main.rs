//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `http_inspect` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the response summary, or the error and a non-zero exit code
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use http_inspect::initialization::init_logger_with;
use http_inspect::{execute, render_to, Opt};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("[{}] - {:#}", "EXIT".red(), e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap prints help/version and exits itself)
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    if opt.no_color {
        colored::control::set_override(false);
    }

    let spec = opt.request_spec()?;
    let display = opt.display_options();

    let summary = execute(&spec)
        .await
        .with_context(|| format!("{} {} failed", spec.method(), spec.url()))?;

    // Nothing is printed until the whole summary is available
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, &summary, &display).context("Failed to write response")?;
    out.flush().context("Failed to write response")?;

    Ok(())
}
