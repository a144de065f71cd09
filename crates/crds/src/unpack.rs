//! Materialize the manifests directory from the cached archive

use crate::collaborators::Unpacker;
use crate::fs;
use crate::layout::CrdCache;
use crdprep_errors::Error;
use crdprep_types::UnpackOutcome;

/// Extract the archive into the entry root unless `crds/` already exists
///
/// Presence of `crds/` is the only completeness signal. An extraction that
/// failed part way can leave a partial `crds/` behind, which later runs will
/// accept as complete; clearing the entry (or fetching with `Always`) is the
/// way out.
///
/// # Errors
///
/// Returns an error if the existence check or the extraction fails.
pub async fn unpack<U>(cache: &CrdCache, unpacker: &U) -> Result<UnpackOutcome, Error>
where
    U: Unpacker + ?Sized,
{
    // TODO: key the skip on a marker written after successful extraction instead of the directory
    if fs::exists(&cache.crds_dir()).await? {
        return Ok(UnpackOutcome::AlreadyPresent);
    }

    // Always the fixed archive name. Freshness accepts any file whose name
    // contains it, so an entry holding only e.g. `old-crds.tar.gz` skips the
    // fetch and then fails here on every run until it is cleaned.
    let entries = unpacker.unpack(&cache.archive_path(), cache.dir()).await?;
    Ok(UnpackOutcome::Extracted { entries })
}
