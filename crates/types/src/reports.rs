//! Structured outcomes of the prepare-crds pipeline
//!
//! Every step reports what it decided and why; callers choose how to log.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Why the freshness check reached its decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessReason {
    /// Policy is `Always`; cache state was not consulted
    PolicyAlways,
    /// The cache entry directory does not exist
    CacheMissing,
    /// The directory exists but holds no non-empty archive
    ArchiveMissingOrEmpty,
    /// A non-empty archive is already cached
    ArchivePresent,
}

/// Result of the freshness check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessDecision {
    pub skip_fetch: bool,
    pub reason: FreshnessReason,
}

impl FreshnessDecision {
    #[must_use]
    pub fn fetch(reason: FreshnessReason) -> Self {
        Self {
            skip_fetch: false,
            reason,
        }
    }

    #[must_use]
    pub fn skip() -> Self {
        Self {
            skip_fetch: true,
            reason: FreshnessReason::ArchivePresent,
        }
    }
}

/// What the fetch step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Skipped,
    Fetched {
        archive_path: PathBuf,
        /// Whether a previous cache entry was wiped first
        replaced_existing: bool,
        size: u64,
        sha256: String,
    },
}

impl FetchOutcome {
    #[must_use]
    pub fn fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }
}

/// What the unpack step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UnpackOutcome {
    /// The manifests directory already existed
    AlreadyPresent,
    Extracted { entries: usize },
}

impl UnpackOutcome {
    #[must_use]
    pub fn extracted(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }
}

/// Full report of one prepare-crds run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareCrdsReport {
    pub remote_url: String,
    pub cache_dir: PathBuf,
    pub crds_dir: PathBuf,
    pub freshness: FreshnessDecision,
    pub fetch: FetchOutcome,
    pub unpack: UnpackOutcome,
}

/// Side-effect free snapshot of a cache entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatus {
    pub cache_dir: PathBuf,
    pub exists: bool,
    /// Size of the first archive file found, if any
    pub archive_size: Option<u64>,
    pub crds_present: bool,
}
