//! # extkit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for filesystem helpers. Everything currently lives in `io`:
//! existence checks (`file_exists`, `probe_path`) and empty-file writes
//! (`write_empty_file`). Callers import from the submodule directly, e.g.
//! `crate::common::fs::io::file_exists`.
//!

/// Existence checks and empty-file writes.
pub mod io;
