#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Archive extraction for crdprep
//!
//! Unpacks gzip-compressed tarballs into a destination directory, refusing
//! entries that would land outside of it.

use crdprep_errors::{ArchiveError, Error};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path};
use tar::Archive;

/// Extract a `.tar.gz` archive into `dest`
///
/// Returns the number of entries unpacked. Entries already on disk are
/// overwritten; nothing is removed if extraction stops part way.
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or is not a valid gzip/tar stream
/// - An entry path is absolute or contains `..`
/// - Writing any entry under `dest` fails
pub async fn extract_tar_gz(archive_path: &Path, dest: &Path) -> Result<usize, Error> {
    tokio::fs::create_dir_all(dest)
        .await
        .map_err(|e| Error::io_with_path(&e, dest))?;

    let archive_path = archive_path.to_path_buf();
    let dest = dest.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let file = File::open(&archive_path)
            .map_err(|e| extraction_failed(&archive_path, &dest, &e.to_string()))?;
        unpack(GzDecoder::new(file), &archive_path, &dest)
    })
    .await
    .map_err(|e| ArchiveError::TaskFailed {
        message: e.to_string(),
    })?
}

fn unpack<R: Read>(reader: R, archive_path: &Path, dest: &Path) -> Result<usize, Error> {
    let mut archive = Archive::new(reader);

    archive.set_preserve_permissions(true);
    archive.set_preserve_mtime(true);
    archive.set_unpack_xattrs(false); // Don't unpack extended attributes
    archive.set_overwrite(true);

    let fail = |e: std::io::Error| extraction_failed(archive_path, dest, &e.to_string());

    let mut count = 0usize;
    for entry in archive.entries().map_err(fail)? {
        let mut entry = entry.map_err(fail)?;
        let path = entry.path().map_err(fail)?.into_owned();

        if !is_contained(&path) {
            return Err(ArchiveError::PathTraversal {
                archive: archive_path.display().to_string(),
                entry: path.display().to_string(),
            }
            .into());
        }

        entry.unpack_in(dest).map_err(fail)?;
        count += 1;
    }

    tracing::debug!(
        archive = %archive_path.display(),
        dest = %dest.display(),
        entries = count,
        "archive unpacked"
    );
    Ok(count)
}

/// Whether an entry path stays under the extraction root
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn extraction_failed(archive: &Path, dest: &Path, message: &str) -> Error {
    ArchiveError::ExtractionFailed {
        archive: archive.display().to_string(),
        dest: dest.display().to_string(),
        message: message.to_string(),
    }
    .into()
}
