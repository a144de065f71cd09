//! Tracing setup and structured logging of pipeline outcomes
//!
//! The pipeline returns what it decided; this module turns those decisions
//! into log records.

use crdprep_types::{FetchOutcome, FreshnessReason, PrepareCrdsReport, UnpackOutcome};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` wins when set. JSON mode writes JSON records so stdout stays
/// machine readable; logs always go to stderr.
pub fn init_tracing(json_mode: bool, verbose: bool, debug_enabled: bool) {
    let default_directive = if debug_enabled {
        "info,crdprep=debug,crdprep_crds=debug,crdprep_net=debug"
    } else if verbose {
        "warn,crdprep=info,crdprep_crds=info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    }
}

/// Log each step of a completed prepare-crds run
pub fn log_report(report: &PrepareCrdsReport) {
    let reason = match report.freshness.reason {
        FreshnessReason::PolicyAlways => "download policy is Always",
        FreshnessReason::CacheMissing => "cache directory does not exist",
        FreshnessReason::ArchiveMissingOrEmpty => "CRD archive missing or empty",
        FreshnessReason::ArchivePresent => "CRD archive exists on disk",
    };
    debug!(
        cache_dir = %report.cache_dir.display(),
        skip_fetch = report.freshness.skip_fetch,
        reason,
        "checked CRD cache"
    );

    match &report.fetch {
        FetchOutcome::Skipped => info!(
            cache_dir = %report.cache_dir.display(),
            "skipped CRD download, archive already cached"
        ),
        FetchOutcome::Fetched {
            archive_path,
            replaced_existing,
            size,
            sha256,
        } => info!(
            url = %report.remote_url,
            archive = %archive_path.display(),
            replaced_existing,
            size,
            sha256 = %sha256,
            "downloaded CRD package"
        ),
    }

    match &report.unpack {
        UnpackOutcome::AlreadyPresent => info!(
            crds_dir = %report.crds_dir.display(),
            "CRD manifests already unpacked"
        ),
        UnpackOutcome::Extracted { entries } => info!(
            crds_dir = %report.crds_dir.display(),
            entries,
            "unpacked CRD archive"
        ),
    }
}
