//! # extkit Exists Handler
//!
//! File: cli/src/commands/exists.rs
//!
//! Implements `extkit exists <PATH>`. Prints `true` when the path is a regular
//! file and `false` otherwise. With `--detailed` it prints the `PathStatus`
//! instead (`file`, `not-a-file`, `inaccessible`). Always exits successfully.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the 'exists' subcommand.
#[derive(Parser, Debug)]
pub struct ExistsArgs {
    /// Path to check. Relative paths resolve against the current directory.
    path: PathBuf,

    /// Distinguish "not a file" from "could not be inspected".
    #[arg(long)]
    detailed: bool,
}

pub async fn handle_exists(args: ExistsArgs) -> Result<()> {
    tracing::info!("Handling exists command for {:?}", args.path);
    if args.detailed {
        println!("{}", io::probe_path(&args.path).await);
    } else {
        println!("{}", io::file_exists(&args.path).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_args_parsing() {
        let args = ExistsArgs::try_parse_from(["exists", "some/file", "--detailed"]).unwrap();
        assert_eq!(args.path, PathBuf::from("some/file"));
        assert!(args.detailed);
        assert!(ExistsArgs::try_parse_from(["exists"]).is_err());
    }
}
