//! # extkit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs a shell command string relative to a working directory and returns its
//! standard output. The command is handed verbatim to the platform shell
//! (`sh -c` on Unix, `cmd /d /s /c "<command>"` on Windows).
//!
//! ## Success and Failure
//!
//! - The child fails to start: `ExtkitError::CommandSpawn`.
//! - The child exits non-zero: `ExtkitError::ExternalCommand`, carrying stderr.
//!   A missing program lands here too, because the shell reports it with a
//!   non-zero exit.
//! - The child exits cleanly but wrote to stderr: under `StderrPolicy::Fail`
//!   (the default) this is `ExtkitError::DiagnosticOutput`, whose message is the
//!   stderr text. Tools that print informational text to stderr trip this; use
//!   `StderrPolicy::Ignore` for them.
//! - Combined stdout + stderr grows past `max_output_bytes`: the child is killed
//!   and the call fails with `ExtkitError::OutputLimitExceeded`.
//!
//! There is no retry, timeout, or streaming. The call returns once the child
//! has exited.
//!
//! ```rust
//! let stdout = process::run_command("dotnet --version", paths.root()?, &CommandOptions::default()).await?;
//! ```
//!
use crate::core::error::{ExtkitError, Result};
use anyhow::anyhow;
use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// Default combined output limit: 500 KiB.
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 500 * 1024;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// How stderr output from a successfully exiting command is treated.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StderrPolicy {
    /// Any stderr output fails the command.
    #[default]
    Fail,
    /// Only the exit status decides; stderr is logged and dropped.
    Ignore,
}

/// Options applied to a single `run_command` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOptions {
    pub max_output_bytes: usize,
    pub stderr_policy: StderrPolicy,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            stderr_policy: StderrPolicy::Fail,
        }
    }
}

enum CaptureError {
    Io(std::io::Error),
    LimitExceeded,
}

/// Runs `command` through the shell in `working_dir` and returns its stdout.
///
/// # Errors
///
/// See the module docs for the full classification. Every failure carries an
/// `ExtkitError` that callers can recover with `downcast_ref`.
pub async fn run_command(
    command: &str,
    working_dir: &Path,
    options: &CommandOptions,
) -> Result<String> {
    info!(command = %command, working_dir = ?working_dir, "Running command");

    let mut child = shell_command(command)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ExtkitError::CommandSpawn {
            cmd: command.to_string(),
            source,
        })?;

    let (stdout, stderr) = match capture_output(&mut child, options.max_output_bytes).await {
        Ok(captured) => captured,
        Err(CaptureError::LimitExceeded) => {
            warn!(
                command = %command,
                limit = options.max_output_bytes,
                "Output limit exceeded, killing child"
            );
            if let Err(e) = child.kill().await {
                warn!("Failed to kill child for '{}': {}", command, e);
            }
            return Err(anyhow!(ExtkitError::OutputLimitExceeded {
                cmd: command.to_string(),
                limit: options.max_output_bytes,
            }));
        }
        Err(CaptureError::Io(e)) => {
            return Err(anyhow!(e).context(format!("Failed to read output of '{}'", command)));
        }
    };

    let status = child
        .wait()
        .await
        .map_err(|e| anyhow!(e).context(format!("Failed to wait for '{}'", command)))?;

    let stdout = String::from_utf8_lossy(&stdout).into_owned();
    let stderr = String::from_utf8_lossy(&stderr).into_owned();
    debug!(
        command = %command,
        status = %status,
        stdout_len = stdout.len(),
        stderr_len = stderr.len(),
        "Command exited"
    );

    if !status.success() {
        return Err(anyhow!(ExtkitError::ExternalCommand {
            cmd: command.to_string(),
            status: status.to_string(),
            output: stderr,
        }));
    }

    if !stderr.is_empty() {
        match options.stderr_policy {
            StderrPolicy::Fail => {
                return Err(anyhow!(ExtkitError::DiagnosticOutput {
                    cmd: command.to_string(),
                    stderr,
                }));
            }
            StderrPolicy::Ignore => {
                warn!(command = %command, "Ignoring stderr output: {}", stderr.trim_end());
            }
        }
    }

    Ok(stdout)
}

/// `cmd.exe` gets the command unescaped, wrapped as `/d /s /c "<command>"`.
#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.raw_arg(format!("/d /s /c \"{}\"", command));
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

/// Reads stdout and stderr together, stopping as soon as their combined size passes `limit`.
async fn capture_output(
    child: &mut Child,
    limit: usize,
) -> std::result::Result<(Vec<u8>, Vec<u8>), CaptureError> {
    let missing = || CaptureError::Io(std::io::Error::other("child pipe was not captured"));
    let stdout = child.stdout.take().ok_or_else(missing)?;
    let stderr = child.stderr.take().ok_or_else(missing)?;
    let total = AtomicUsize::new(0);

    tokio::try_join!(
        read_capped(stdout, limit, &total),
        read_capped(stderr, limit, &total)
    )
}

async fn read_capped<R: AsyncRead + Unpin>(
    mut reader: R,
    limit: usize,
    total: &AtomicUsize,
) -> std::result::Result<Vec<u8>, CaptureError> {
    let mut captured = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut chunk).await.map_err(CaptureError::Io)?;
        if n == 0 {
            return Ok(captured);
        }
        if total.fetch_add(n, Ordering::Relaxed) + n > limit {
            return Err(CaptureError::LimitExceeded);
        }
        captured.extend_from_slice(&chunk[..n]);
    }
}
