//! Decide whether the cached archive can be reused

use crate::fs;
use crate::layout::CrdCache;
use crate::ARCHIVE_FILE_NAME;
use crdprep_errors::Error;
use crdprep_types::{DownloadPolicy, FreshnessDecision, FreshnessReason};
use std::path::Path;

/// Check whether a fetch is needed for `cache` under `policy`
///
/// `Always` short-circuits before touching the filesystem. Otherwise a missing
/// entry or an entry without a non-empty archive means "fetch"; neither is an
/// error.
///
/// # Errors
///
/// Returns an error only if checking the entry's existence fails.
pub async fn check(cache: &CrdCache, policy: DownloadPolicy) -> Result<FreshnessDecision, Error> {
    if policy == DownloadPolicy::Always {
        return Ok(FreshnessDecision::fetch(FreshnessReason::PolicyAlways));
    }

    if !fs::exists(cache.dir()).await? {
        return Ok(FreshnessDecision::fetch(FreshnessReason::CacheMissing));
    }

    if find_archive(cache.dir()).await.is_some() {
        Ok(FreshnessDecision::skip())
    } else {
        Ok(FreshnessDecision::fetch(
            FreshnessReason::ArchiveMissingOrEmpty,
        ))
    }
}

/// Size of the first non-empty archive among the immediate files of `dir`
///
/// Any file whose name contains the archive file name counts. An unreadable
/// directory is treated as holding no archive, which leads to a re-fetch.
pub(crate) async fn find_archive(dir: &Path) -> Option<u64> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "cannot list cache entry");
            return None;
        }
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let Ok(metadata) = entry.metadata().await else {
            continue;
        };
        if !metadata.is_file() || metadata.len() == 0 {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .contains(ARCHIVE_FILE_NAME)
        {
            return Some(metadata.len());
        }
    }
    None
}
