//! # extkit Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges, and validates extkit's configuration. The
//! configuration supplies the installation root (unless `--root` overrides it),
//! the limits and stderr policy used when running shell commands, and the
//! list of setup steps run by `extkit install`.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.extkit.toml` in the current directory or its ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Default values defined in the code
//!
//! After merging, `~` in `[root].path` is expanded and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [root]
//! path = "~/.vscode/extensions/my-ext"
//!
//! [command]
//! max_output_bytes = 512000
//! stderr_policy = "ignore"
//!
//! [install]
//! steps = ["./bin/setup --quiet"]
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let options = cfg.command.options();
//! ```
//!
use crate::common::process::{CommandOptions, StderrPolicy, DEFAULT_MAX_OUTPUT_BYTES};
use crate::core::error::{ExtkitError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub root: RootConfig,
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub install: InstallConfig,
}

/// Where the extension is installed.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct RootConfig {
    /// Installation root (can use ~). Overridden by `--root`.
    #[serde(default)]
    pub path: Option<String>,
}

/// Settings applied to every shell command extkit runs.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CommandConfig {
    /// Combined stdout + stderr capture limit in bytes.
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
    /// Whether stderr output on a zero exit counts as failure.
    #[serde(default)]
    pub stderr_policy: StderrPolicy,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            max_output_bytes: default_max_output_bytes(),
            stderr_policy: StderrPolicy::default(),
        }
    }
}

impl CommandConfig {
    /// Converts the configured values into options for `process::run_command`.
    pub fn options(&self) -> CommandOptions {
        CommandOptions {
            max_output_bytes: self.max_output_bytes,
            stderr_policy: self.stderr_policy,
        }
    }
}

/// Steps run once by `extkit install`, in order, from the root directory.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    #[serde(default)]
    pub steps: Vec<String>,
}

fn default_max_output_bytes() -> usize {
    DEFAULT_MAX_OUTPUT_BYTES
}

const PROJECT_CONFIG_FILENAME: &str = ".extkit.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Extkit", "extkit") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file ({}) found.", PROJECT_CONFIG_FILENAME);
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.root.path = project_cfg.root.path.or(user.root.path);
    merged.command.max_output_bytes =
        if project_cfg.command.max_output_bytes != default_max_output_bytes() {
            project_cfg.command.max_output_bytes
        } else {
            user.command.max_output_bytes
        };
    merged.command.stderr_policy = if project_cfg.command.stderr_policy != StderrPolicy::default()
    {
        project_cfg.command.stderr_policy
    } else {
        user.command.stderr_policy
    };
    merged.install.steps = if !project_cfg.install.steps.is_empty() {
        project_cfg.install.steps
    } else {
        user.install.steps
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(root) = config.root.path.as_mut() {
        *root = shellexpand::tilde(root).into_owned();
        debug!("Expanded root path: {}", root);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.command.max_output_bytes == 0 {
        return Err(anyhow!(ExtkitError::Config(
            "command.max_output_bytes must be greater than zero.".to_string()
        )));
    }
    if let Some(root) = &config.root.path {
        if root.trim().is_empty() {
            return Err(anyhow!(ExtkitError::Config(
                "root.path cannot be empty.".to_string()
            )));
        }
    }
    if let Some(index) = config.install.steps.iter().position(|s| s.trim().is_empty()) {
        return Err(anyhow!(ExtkitError::Config(format!(
            "install.steps[{}] is blank.",
            index
        ))));
    }
    Ok(())
}
