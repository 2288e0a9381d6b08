//! # extkit Paths Handler
//!
//! File: cli/src/commands/paths.rs
//!
//! Implements `extkit paths`, which prints the installation root and the paths
//! derived from it. Fails if no root is configured.
//!
//! ```bash
//! extkit --root ~/.vscode/extensions/my-ext paths
//! extkit paths --bin
//! ```
//!
use crate::core::{error::Result, paths::RootRegistry};
use clap::Parser;

/// Arguments for the 'paths' subcommand.
#[derive(Parser, Debug, Default)]
pub struct PathsArgs {
    /// Print only the binary directory.
    #[arg(long, conflicts_with = "lock")]
    bin: bool,

    /// Print only the install lock path.
    #[arg(long)]
    lock: bool,
}

pub async fn handle_paths(args: PathsArgs, paths: &RootRegistry) -> Result<()> {
    tracing::info!("Handling paths command...");
    if args.bin {
        println!("{}", paths.bin_dir()?.display());
    } else if args.lock {
        println!("{}", paths.lock_file()?.display());
    } else {
        println!("root: {}", paths.root()?.display());
        println!("bin:  {}", paths.bin_dir()?.display());
        println!("lock: {}", paths.lock_file()?.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_args_parsing() {
        let args = PathsArgs::try_parse_from(["paths", "--bin"]).unwrap();
        assert!(args.bin && !args.lock);
        assert!(PathsArgs::try_parse_from(["paths", "--bin", "--lock"]).is_err());
    }

    #[tokio::test]
    async fn test_handle_paths_requires_root() {
        let result = handle_paths(PathsArgs::default(), &RootRegistry::default()).await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Root path has not been set"));
    }
}
