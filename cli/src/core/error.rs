//! # extkit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout extkit. Errors fall
//! into three groups:
//! - Configuration errors (root path never set, invalid config values)
//! - Filesystem errors (the install lock could not be written)
//! - Command execution errors (spawn failure, non-zero exit, stderr output,
//!   output over the capture limit)
//!
//! ## Architecture
//!
//! - `ExtkitError`: a `thiserror` enum carrying the specific failure
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach context
//!
//! Filesystem *reads* (stat calls) never surface here: `common::fs::io::file_exists`
//! folds them into `false`.
//!
//! ## Examples
//!
//! ```rust
//! // Classify a failed command
//! match process::run_command("make", root, &options).await {
//!     Ok(stdout) => println!("{}", stdout),
//!     Err(e) if matches!(e.downcast_ref::<ExtkitError>(), Some(ExtkitError::DiagnosticOutput { .. })) => {
//!         println!("make wrote to stderr: {}", e);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for extkit.
#[derive(Error, Debug)]
pub enum ExtkitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Failed to spawn command '{cmd}': {source}")]
    CommandSpawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },

    /// The command exited cleanly but wrote to stderr. The message is the stderr text itself.
    #[error("{stderr}")]
    DiagnosticOutput { cmd: String, stderr: String },

    #[error("Output of command '{cmd}' exceeded {limit} bytes")]
    OutputLimitExceeded { cmd: String, limit: usize },
}

/// Type alias for Result using anyhow::Error so callers can add context freely.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = ExtkitError::Config("Root path has not been set".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Root path has not been set"
        );

        let failed = ExtkitError::ExternalCommand {
            cmd: "false".into(),
            status: "exit status: 1".into(),
            output: "boom".into(),
        };
        assert_eq!(
            failed.to_string(),
            "External command failed: false, Status: exit status: 1, Output:\nboom"
        );

        let limit = ExtkitError::OutputLimitExceeded {
            cmd: "yes".into(),
            limit: 16,
        };
        assert_eq!(limit.to_string(), "Output of command 'yes' exceeded 16 bytes");
    }

    #[test]
    fn test_diagnostic_output_message_is_stderr() {
        let err = ExtkitError::DiagnosticOutput {
            cmd: "tool --check".into(),
            stderr: "warning: deprecated flag\n".into(),
        };
        assert_eq!(err.to_string(), "warning: deprecated flag\n");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = ExtkitError::FileSystem("disk full".into()).into();
        let err = err.context("Failed to touch lock file");
        assert!(matches!(
            err.downcast_ref::<ExtkitError>(),
            Some(ExtkitError::FileSystem(_))
        ));
    }
}
