//! # extkit Root Path Registry
//!
//! File: cli/src/core/paths.rs
//!
//! ## Overview
//!
//! Every path extkit touches is derived from one installation root: the binary
//! directory (`<root>/bin`) and the install lock (`<root>/install.lock`).
//! `RootRegistry` holds that root. It is created once in `main`, filled from the
//! configuration and the `--root` flag, and then passed by reference to the
//! command handlers.
//!
//! The registry starts empty. Asking for the root (or anything derived from it)
//! before it is set is a configuration error, not a panic.
//!
//! ```rust
//! let mut paths = RootRegistry::default();
//! paths.set_root("/opt/ext");
//! assert_eq!(paths.bin_dir()?, PathBuf::from("/opt/ext/bin"));
//! ```
//!
use crate::core::error::{ExtkitError, Result};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the directory under the root holding the extension's binaries.
pub const BIN_DIR_NAME: &str = "bin";
/// Name of the marker file recording that setup has completed.
pub const LOCK_FILE_NAME: &str = "install.lock";

/// Holds the installation root. Unset until `set_root` is called.
#[derive(Debug, Default, Clone)]
pub struct RootRegistry {
    root: Option<PathBuf>,
}

impl RootRegistry {
    /// Creates a registry with the root already set.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let mut registry = Self::default();
        registry.set_root(root);
        registry
    }

    /// Stores the installation root. Repeated calls replace the previous value.
    /// An empty path clears the root.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        let root = root.into();
        if root.as_os_str().is_empty() {
            debug!("Empty installation root given, root is now unset");
            self.root = None;
            return;
        }
        debug!("Installation root set to {:?}", root);
        self.root = Some(root);
    }

    /// Returns the installation root.
    ///
    /// # Errors
    ///
    /// Returns `ExtkitError::Config` if no root has been set.
    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or_else(|| {
            anyhow!(ExtkitError::Config(
                "Root path has not been set. Pass --root, set EXTKIT_ROOT, or configure [root].path."
                    .to_string()
            ))
        })
    }

    /// Returns `<root>/bin`. No filesystem access.
    pub fn bin_dir(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(BIN_DIR_NAME))
    }

    /// Returns `<root>/install.lock`. No filesystem access.
    pub fn lock_file(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(LOCK_FILE_NAME))
    }
}
