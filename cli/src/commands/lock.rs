//! # extkit Lock Handler
//!
//! File: cli/src/commands/lock.rs
//!
//! Implements `extkit lock status` and `extkit lock touch` on top of
//! `common::lock`. There is no remove action; the lock is deleted by whatever
//! uninstalls the extension.
//!
use crate::common::lock;
use crate::core::{error::Result, paths::RootRegistry};
use clap::{Parser, Subcommand};

/// Arguments for the 'lock' command group.
#[derive(Parser, Debug)]
pub struct LockArgs {
    #[command(subcommand)]
    command: LockCommand,
}

#[derive(Subcommand, Debug)]
enum LockCommand {
    /// Print whether the install lock exists
    Status,
    /// Create (or truncate) the install lock
    Touch,
}

pub async fn handle_lock(args: LockArgs, paths: &RootRegistry) -> Result<()> {
    match args.command {
        LockCommand::Status => {
            let exists = lock::lock_file_exists(paths).await?;
            let lock_file = paths.lock_file()?;
            if exists {
                println!("Install lock present: {}", lock_file.display());
            } else {
                println!("Install lock absent: {}", lock_file.display());
            }
        }
        LockCommand::Touch => {
            lock::touch_lock_file(paths).await?;
            println!("Created install lock: {}", paths.lock_file()?.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lock_args_parsing() {
        let args = LockArgs::try_parse_from(["lock", "touch"]).unwrap();
        assert!(matches!(args.command, LockCommand::Touch));
        assert!(LockArgs::try_parse_from(["lock"]).is_err());
        assert!(LockArgs::try_parse_from(["lock", "remove"]).is_err());
    }

    #[tokio::test]
    async fn test_handle_lock_touch_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let paths = RootRegistry::with_root(dir.path());
        let args = LockArgs::try_parse_from(["lock", "touch"])?;
        handle_lock(args, &paths).await?;
        assert!(dir.path().join("install.lock").is_file());
        Ok(())
    }
}
