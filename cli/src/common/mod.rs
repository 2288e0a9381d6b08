//! # extkit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers used by the command handlers:
//!
//! - **`fs`**: file existence checks and empty-file writes.
//! - **`lock`**: the `<root>/install.lock` marker.
//! - **`process`**: running shell commands with captured, size-capped output.
//! - **`sequence`**: running async steps strictly one after another.
//!
//! ```rust
//! use crate::common::{lock, process, sequence};
//!
//! # async fn run_example(paths: &RootRegistry) -> Result<()> {
//! if !lock::lock_file_exists(paths).await? {
//!     let options = process::CommandOptions::default();
//!     sequence::chain(["./bin/setup"], |step| process::run_command(step, paths.root()?, &options)).await?;
//!     lock::touch_lock_file(paths).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!

/// File existence checks and empty-file writes.
pub mod fs;
/// Install lock marker queries and creation.
pub mod lock;
/// Shell command execution.
pub mod process;
/// Strictly sequential async chaining.
pub mod sequence;
