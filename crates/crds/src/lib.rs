#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Cached download-and-unpack of CRD packages
//!
//! The prepare-crds task makes sure the CRD manifests of a remote package are
//! materialized under `<data_dir>/cache/<sha256(url)>/crds` before later
//! installation steps read them. The pipeline is:
//!
//! 1. resolve the cache entry from the trimmed source URL
//! 2. decide whether a fetch is needed ([`freshness`])
//! 3. wipe, recreate and download into the entry ([`fetch`])
//! 4. extract the archive unless `crds/` already exists ([`unpack`])
//!
//! Steps run one after another; the first error aborts the run. Each step
//! returns a structured outcome instead of logging, so callers decide what to
//! report. Concurrent runs against the same entry are not synchronized and must
//! be serialized by the caller.

mod collaborators;
pub mod fetch;
pub mod freshness;
mod fs;
pub mod layout;
mod pipeline;
pub mod unpack;

pub use collaborators::{Downloader, TarGzUnpacker, Unpacker};
pub use layout::CrdCache;
pub use pipeline::{PrepareCrds, PrepareCrdsInput};

/// Fixed file name of the downloaded package inside a cache entry
pub const ARCHIVE_FILE_NAME: &str = "crds.tar.gz";

/// Fixed directory name of the extracted manifests inside a cache entry
pub const CRDS_DIR_NAME: &str = "crds";

/// Directory under the data dir that holds all cache entries
pub const CACHE_DIR_NAME: &str = "cache";

/// Workflow task names, used as tracing span names
pub mod task {
    pub const PREPARE_CRDS: &str = "prepare-crds";
    pub const DOWNLOAD_CRDS: &str = "download-crds";
    pub const UNPACK: &str = "unpack";
}
