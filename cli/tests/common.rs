//! # extkit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate and runs the compiled
//! `extkit` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get extkit Command (`extkit_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `extkit` binary with
/// `EXTKIT_ROOT` removed, so a value in the developer's environment cannot
/// leak into a test.
///
/// ## Panics
/// Panics if the `extkit` binary cannot be found via `Command::cargo_bin`.
pub fn extkit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("extkit").expect("Failed to find extkit binary for testing");
    cmd.env_remove("EXTKIT_ROOT");
    cmd
}

/// Like `extkit_cmd`, but running from `dir` with `--root <root>` set.
///
/// Running from a temp directory keeps `.extkit.toml` files in the source
/// tree from being picked up.
pub fn extkit_in(dir: &Path, root: &Path) -> Command {
    let mut cmd = extkit_cmd();
    cmd.current_dir(dir).arg("--root").arg(root);
    cmd
}
