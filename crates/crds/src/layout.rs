//! Cache entry resolution
//!
//! A cache entry lives at `<data_dir>/cache/<hex sha256 of the trimmed URL>`.
//! Only surrounding whitespace is trimmed: URLs differing in any other way,
//! a trailing slash included, get separate entries.

use crate::fs;
use crate::{ARCHIVE_FILE_NAME, CACHE_DIR_NAME, CRDS_DIR_NAME};
use crdprep_errors::Error;
use crdprep_hash::Hash;
use crdprep_types::CacheStatus;
use std::path::{Path, PathBuf};

/// Key of the cache entry for `remote_url`
#[must_use]
pub fn cache_key(remote_url: &str) -> String {
    Hash::from_data(remote_url.trim().as_bytes()).to_hex()
}

/// Directory of the cache entry for `remote_url` under `data_dir`
#[must_use]
pub fn cache_dir(data_dir: &Path, remote_url: &str) -> PathBuf {
    data_dir.join(CACHE_DIR_NAME).join(cache_key(remote_url))
}

/// A resolved cache entry and its fixed sub-paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrdCache {
    dir: PathBuf,
}

impl CrdCache {
    #[must_use]
    pub fn resolve(data_dir: &Path, remote_url: &str) -> Self {
        Self {
            dir: cache_dir(data_dir, remote_url),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.dir.join(ARCHIVE_FILE_NAME)
    }

    #[must_use]
    pub fn crds_dir(&self) -> PathBuf {
        self.dir.join(CRDS_DIR_NAME)
    }

    /// Snapshot the entry without modifying it
    ///
    /// # Errors
    ///
    /// Returns an error if an existence check fails.
    pub async fn inspect(&self) -> Result<CacheStatus, Error> {
        let exists = fs::exists(&self.dir).await?;
        let (archive_size, crds_present) = if exists {
            (
                crate::freshness::find_archive(&self.dir).await,
                fs::exists(&self.crds_dir()).await?,
            )
        } else {
            (None, false)
        };

        Ok(CacheStatus {
            cache_dir: self.dir.clone(),
            exists,
            archive_size,
            crds_present,
        })
    }

    /// Delete the whole entry; returns whether anything was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the existence check or the removal fails.
    pub async fn remove(&self) -> Result<bool, Error> {
        if !fs::exists(&self.dir).await? {
            return Ok(false);
        }
        fs::remove_dir_all(&self.dir).await?;
        Ok(true)
    }
}
