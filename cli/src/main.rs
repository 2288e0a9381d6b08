//! # extkit Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point for the extkit CLI. It:
//! - Parses command-line arguments with Clap
//! - Sets up logging based on the verbosity flags
//! - Loads the configuration and fills the root registry
//! - Routes execution to the matching command handler
//!
//! ## Root Resolution
//!
//! The registry starts empty. `[root].path` from the configuration is applied
//! first, then `--root` (or `EXTKIT_ROOT`), so the flag wins. Commands that
//! need the root fail with a configuration error when neither is present.
//!
//! ## Examples
//!
//! ```bash
//! extkit --root ~/.vscode/extensions/my-ext paths
//! EXTKIT_ROOT=/opt/ext extkit -v install
//! extkit exists ./bin/server
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (paths, run, exists, lock, install)
mod common; // Shared helpers (process, fs, lock, sequence)
mod core; // Errors, configuration, root registry

use crate::core::paths::RootRegistry;
use std::path::PathBuf;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "extkit",
    about = "Installation root helpers for editor extensions",
    long_about = "Resolve an extension's installation paths, run shell commands from its root,\n\
                  and track one-time setup with an install lock file.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Installation root. Overrides `[root].path` from the configuration.
    #[arg(long, global = true, env = "EXTKIT_ROOT")]
    root: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Print the installation root and derived paths
    Paths(commands::paths::PathsArgs),
    /// Run a shell command from the installation root
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    /// Check whether a path is a regular file
    Exists(commands::exists::ExistsArgs),
    /// Inspect or create the install lock
    Lock(commands::lock::LockArgs),
    /// Run setup steps once, then create the install lock
    #[command(alias = "i")]
    Install(commands::install::InstallArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> crate::core::error::Result<()> {
    // `exists` needs neither the configuration nor the root.
    let command = match cli.command {
        Commands::Exists(args) => return commands::exists::handle_exists(args).await,
        command => command,
    };

    let config = crate::core::config::load_config()?;

    let mut paths = RootRegistry::default();
    if let Some(root) = &config.root.path {
        paths.set_root(root);
    }
    if let Some(root) = cli.root {
        paths.set_root(root);
    }

    match command {
        Commands::Paths(args) => commands::paths::handle_paths(args, &paths).await,
        Commands::Run(args) => commands::run::handle_run(args, &config, &paths).await,
        Commands::Exists(args) => commands::exists::handle_exists(args).await,
        Commands::Lock(args) => commands::lock::handle_lock(args, &paths).await,
        Commands::Install(args) => {
            commands::install::handle_install(args, &config, &paths).await
        }
    }
}
