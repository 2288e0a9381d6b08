//! # extkit Install Handler
//!
//! File: cli/src/commands/install.rs
//!
//! ## Overview
//!
//! Implements `extkit install`, the one-time setup flow the install lock
//! exists for. Setup steps are shell commands run from the installation root.
//!
//! ## Workflow
//!
//! 1. If `<root>/install.lock` exists and `--force` is not given, report that
//!    setup already ran and stop.
//! 2. Pick the steps: those given on the command line, otherwise
//!    `[install].steps` from the configuration.
//! 3. Run the steps one after another with `sequence::chain`, printing each
//!    step's stdout. The first failing step aborts the flow.
//! 4. Touch the install lock.
//!
//! A failed run leaves the lock absent, so the next `extkit install` retries
//! from the first step.
//!
//! ## Usage
//!
//! ```bash
//! # Run the configured steps once
//! extkit install
//!
//! # Run explicit steps, even if setup already completed
//! extkit install --force "./bin/fetch-deps" "./bin/server --selftest"
//! ```
//!
use crate::common::{lock, process, sequence};
use crate::core::{config::Config, error::Result, paths::RootRegistry};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for the 'install' subcommand.
#[derive(Parser, Debug, Default)]
pub struct InstallArgs {
    /// Setup steps to run instead of the configured `[install].steps`.
    steps: Vec<String>,

    /// Run the steps even if the install lock already exists.
    #[arg(long, short = 'f')]
    force: bool,
}

pub async fn handle_install(args: InstallArgs, config: &Config, paths: &RootRegistry) -> Result<()> {
    info!("Handling install command...");
    let root = paths.root()?;

    if !args.force && lock::lock_file_exists(paths).await? {
        println!(
            "Setup already completed ({} exists). Use --force to run it again.",
            paths.lock_file()?.display()
        );
        return Ok(());
    }

    let steps = if args.steps.is_empty() {
        config.install.steps.clone()
    } else {
        args.steps
    };
    if steps.is_empty() {
        info!("No install steps configured; only creating the install lock.");
    }

    let options = config.command.options();
    let total = steps.len();
    sequence::chain(steps.iter().enumerate(), |(index, step)| {
        let options = &options;
        async move {
            println!("[{}/{}] {}", index + 1, total, step);
            let stdout = process::run_command(step, root, options)
                .await
                .with_context(|| format!("Install step {} failed: {}", index + 1, step))?;
            print!("{}", stdout);
            Ok::<(), anyhow::Error>(())
        }
    })
    .await?;

    lock::touch_lock_file(paths).await?;
    println!("Setup complete.");
    Ok(())
}
