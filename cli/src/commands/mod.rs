//! # extkit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Each submodule implements one top-level `extkit` subcommand. A module
//! defines a Clap `Args` struct and an async `handle_<name>` function that
//! `main.rs` calls with the parsed arguments, the loaded configuration, and
//! the root registry.
//!

/// `extkit exists`: check whether a path is a regular file.
pub mod exists;
/// `extkit install`: run setup steps once, guarded by the install lock.
pub mod install;
/// `extkit lock`: inspect or create the install lock.
pub mod lock;
/// `extkit paths`: print the root, bin directory, and lock file path.
pub mod paths;
/// `extkit run`: run a shell command from the root (or another directory).
pub mod run;
