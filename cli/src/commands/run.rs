//! # extkit Run Handler
//!
//! File: cli/src/commands/run.rs
//!
//! ## Overview
//!
//! Implements `extkit run`, a thin CLI over `common::process::run_command`.
//! The command string is passed to the shell as-is and its stdout is printed.
//!
//! ## Usage
//!
//! ```bash
//! # Run from the installation root
//! extkit run "./bin/server --version"
//!
//! # Run elsewhere, tolerating informational stderr output
//! extkit run --cwd /tmp --allow-stderr "dotnet --info"
//! ```
//!
use crate::common::process::{self, StderrPolicy};
use crate::core::{config::Config, error::Result, paths::RootRegistry};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the 'run' subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Shell command to execute, passed verbatim to the shell.
    command: String,

    /// Working directory (defaults to the installation root).
    #[arg(long)]
    cwd: Option<PathBuf>,

    /// Treat stderr output as informational; only the exit status decides success.
    #[arg(long)]
    allow_stderr: bool,
}

pub async fn handle_run(args: RunArgs, config: &Config, paths: &RootRegistry) -> Result<()> {
    tracing::info!("Handling run command...");

    let working_dir = match args.cwd {
        Some(dir) => dir,
        None => paths.root()?.to_path_buf(),
    };
    let mut options = config.command.options();
    if args.allow_stderr {
        options.stderr_policy = StderrPolicy::Ignore;
    }

    let stdout = process::run_command(&args.command, &working_dir, &options)
        .await
        .with_context(|| format!("Command failed: {}", args.command))?;
    print!("{}", stdout);
    Ok(())
}
