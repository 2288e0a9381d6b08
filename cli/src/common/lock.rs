//! # extkit Install Lock (`common::lock`)
//!
//! File: cli/src/common/lock.rs
//!
//! The install lock is an empty file at `<root>/install.lock`. Its presence
//! means one-time setup has already completed. This module only reads and
//! creates it; nothing in extkit deletes it.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use crate::core::paths::RootRegistry;
use anyhow::Context;

/// Returns whether the install lock exists as a regular file.
///
/// Fails only when the root has not been set.
pub async fn lock_file_exists(paths: &RootRegistry) -> Result<bool> {
    let lock_file = paths.lock_file()?;
    Ok(io::file_exists(&lock_file).await)
}

/// Creates (or truncates) the install lock.
pub async fn touch_lock_file(paths: &RootRegistry) -> Result<()> {
    let lock_file = paths.lock_file()?;
    io::write_empty_file(&lock_file)
        .await
        .with_context(|| format!("Failed to create install lock {:?}", lock_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ExtkitError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fresh_root_has_no_lock() -> Result<()> {
        let dir = tempdir()?;
        let paths = RootRegistry::with_root(dir.path());
        assert!(!lock_file_exists(&paths).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_touch_then_exists() -> Result<()> {
        let dir = tempdir()?;
        let paths = RootRegistry::with_root(dir.path());
        touch_lock_file(&paths).await?;
        assert!(lock_file_exists(&paths).await?);
        assert_eq!(std::fs::metadata(dir.path().join("install.lock"))?.len(), 0);
        // Touching again is fine.
        touch_lock_file(&paths).await?;
        assert!(lock_file_exists(&paths).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_lock_directory_does_not_count() -> Result<()> {
        let dir = tempdir()?;
        std::fs::create_dir(dir.path().join("install.lock"))?;
        let paths = RootRegistry::with_root(dir.path());
        assert!(!lock_file_exists(&paths).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_touch_in_missing_root_fails() -> Result<()> {
        let dir = tempdir()?;
        let paths = RootRegistry::with_root(dir.path().join("gone"));
        let err = touch_lock_file(&paths).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtkitError>(),
            Some(ExtkitError::FileSystem(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_unset_root_fails() {
        let paths = RootRegistry::default();
        let err = lock_file_exists(&paths).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtkitError>(),
            Some(ExtkitError::Config(_))
        ));
        assert!(touch_lock_file(&paths).await.is_err());
    }
}
