//! Refresh a cache entry from the remote source

use crate::collaborators::Downloader;
use crate::fs;
use crate::layout::CrdCache;
use crdprep_errors::Error;
use crdprep_types::FetchOutcome;

/// Wipe the cache entry, recreate it owner-only, and download the archive
///
/// The entry is replaced wholesale, never patched, so old and new files are
/// never mixed. Nothing here is retried.
///
/// # Errors
///
/// Returns an error if the existence check, removal, directory creation or
/// download fails. A failed removal leaves the entry as-is for manual cleanup.
pub async fn fetch<D>(
    cache: &CrdCache,
    remote_url: &str,
    downloader: &D,
) -> Result<FetchOutcome, Error>
where
    D: Downloader + ?Sized,
{
    let replaced_existing = fs::exists(cache.dir()).await?;
    if replaced_existing {
        fs::remove_dir_all(cache.dir()).await?;
    }

    fs::create_private_dir_all(cache.dir()).await?;

    let archive_path = cache.archive_path();
    let result = downloader.download(remote_url, &archive_path).await?;

    Ok(FetchOutcome::Fetched {
        archive_path,
        replaced_existing,
        size: result.size,
        sha256: result.hash.to_hex(),
    })
}
