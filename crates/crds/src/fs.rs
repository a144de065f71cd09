//! Filesystem helpers with cache-specific error context

use crdprep_errors::{Error, StorageError};
use std::path::Path;

/// Whether `path` exists; a failed check is an error, absence is not
pub(crate) async fn exists(path: &Path) -> Result<bool, Error> {
    tokio::fs::try_exists(path).await.map_err(|e| {
        StorageError::ExistenceCheckFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

pub(crate) async fn remove_dir_all(path: &Path) -> Result<(), Error> {
    tokio::fs::remove_dir_all(path).await.map_err(|e| {
        StorageError::RemoveFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Create `path` and any missing parents, readable only by the owner
pub(crate) async fn create_private_dir_all(path: &Path) -> Result<(), Error> {
    let mut builder = tokio::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o700);

    builder.create(path).await.map_err(|e| {
        StorageError::CreateFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_exists_reports_absence_without_error() {
        let temp = tempdir().unwrap();
        assert!(exists(temp.path()).await.unwrap());
        assert!(!exists(&temp.path().join("missing")).await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_private_dir_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let dir = temp.path().join("cache").join("abc");
        create_private_dir_all(&dir).await.unwrap();

        let mode = std::fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
        assert_eq!(mode & 0o700, 0o700);
    }
}
