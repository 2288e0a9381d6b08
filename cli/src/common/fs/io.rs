//! # extkit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small async wrappers around `tokio::fs` used by the lock file helpers and
//! the `exists` command:
//! - **`file_exists`**: `true` only for an existing regular file. Any stat
//!   failure (missing path, permission denied, ...) is reported as `false`.
//! - **`probe_path`**: the same stat, but keeps "not a file" and "could not
//!   stat" apart as a `PathStatus`.
//! - **`write_empty_file`**: creates a file with no content, or truncates an
//!   existing one. Parent directories are *not* created.
//!
use crate::core::error::{ExtkitError, Result};
use anyhow::Context;
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Outcome of stat-ing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// The path exists and is a regular file.
    File,
    /// The path does not exist, or exists as something other than a regular file.
    NotFile,
    /// The path could not be inspected (permissions, I/O error, ...).
    Inaccessible,
}

impl fmt::Display for PathStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathStatus::File => "file",
            PathStatus::NotFile => "not-a-file",
            PathStatus::Inaccessible => "inaccessible",
        };
        f.write_str(s)
    }
}

/// Stats `path` (following symlinks) and classifies the result.
pub async fn probe_path(path: &Path) -> PathStatus {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => PathStatus::File,
        Ok(_) => PathStatus::NotFile,
        Err(e) if e.kind() == ErrorKind::NotFound => PathStatus::NotFile,
        Err(e) => {
            debug!("Could not stat {:?}: {}", path, e);
            PathStatus::Inaccessible
        }
    }
}

/// Returns `true` if `path` exists and is a regular file. Never fails.
pub async fn file_exists(path: &Path) -> bool {
    let exists = probe_path(path).await == PathStatus::File;
    debug!("file_exists({:?}) = {}", path, exists);
    exists
}

/// Creates `path` with empty content, truncating it if it already exists.
///
/// # Errors
///
/// Returns `ExtkitError::FileSystem` (with the path as context) if the write
/// fails, e.g. when the parent directory is missing or read-only.
pub async fn write_empty_file(path: &Path) -> Result<()> {
    fs::write(path, b"")
        .await
        .map_err(|e| ExtkitError::FileSystem(e.to_string()))
        .with_context(|| format!("Failed to write empty file {:?}", path))?;
    info!("Wrote empty file: {:?}", path);
    Ok(())
}
