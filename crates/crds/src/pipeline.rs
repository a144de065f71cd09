//! The prepare-crds pipeline

use crate::collaborators::{Downloader, TarGzUnpacker, Unpacker};
use crate::layout::CrdCache;
use crate::{fetch, freshness, task, unpack};
use crdprep_errors::Error;
use crdprep_net::NetClient;
use crdprep_types::{DownloadPolicy, FetchOutcome, PrepareCrdsReport};
use std::path::PathBuf;
use tracing::Instrument;

/// Everything a prepare-crds run needs from its caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareCrdsInput {
    /// Location of the CRD package
    pub remote_url: String,
    pub download_policy: DownloadPolicy,
    /// Base directory holding `cache/`
    pub data_dir: PathBuf,
}

impl PrepareCrdsInput {
    #[must_use]
    pub fn new(remote_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            remote_url: remote_url.into(),
            download_policy: DownloadPolicy::default(),
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: DownloadPolicy) -> Self {
        self.download_policy = policy;
        self
    }

    #[must_use]
    pub fn cache(&self) -> CrdCache {
        CrdCache::resolve(&self.data_dir, &self.remote_url)
    }
}

/// Runs freshness check, fetch and unpack against one cache entry
#[derive(Debug, Clone)]
pub struct PrepareCrds<D = NetClient, U = TarGzUnpacker> {
    downloader: D,
    unpacker: U,
}

impl PrepareCrds {
    /// Pipeline using HTTP downloads and tar.gz extraction
    #[must_use]
    pub fn new(client: NetClient) -> Self {
        Self::with_collaborators(client, TarGzUnpacker)
    }
}

impl<D, U> PrepareCrds<D, U>
where
    D: Downloader,
    U: Unpacker,
{
    #[must_use]
    pub fn with_collaborators(downloader: D, unpacker: U) -> Self {
        Self {
            downloader,
            unpacker,
        }
    }

    /// Make the CRD manifests for `input` available on disk
    ///
    /// A second run after a successful one with `IfNotPresent` performs no
    /// download and no extraction.
    ///
    /// # Errors
    ///
    /// Returns the first error from any step; later steps do not run.
    pub async fn run(&self, input: &PrepareCrdsInput) -> Result<PrepareCrdsReport, Error> {
        let cache = input.cache();
        let span = tracing::info_span!(
            task::PREPARE_CRDS,
            url = %input.remote_url,
            cache_dir = %cache.dir().display(),
        );

        async {
            let freshness = freshness::check(&cache, input.download_policy).await?;

            let fetch = if freshness.skip_fetch {
                FetchOutcome::Skipped
            } else {
                fetch::fetch(&cache, &input.remote_url, &self.downloader)
                    .instrument(tracing::debug_span!(task::DOWNLOAD_CRDS))
                    .await?
            };

            let unpack = unpack::unpack(&cache, &self.unpacker)
                .instrument(tracing::debug_span!(task::UNPACK))
                .await?;

            Ok::<_, Error>(PrepareCrdsReport {
                remote_url: input.remote_url.clone(),
                cache_dir: cache.dir().to_path_buf(),
                crds_dir: cache.crds_dir(),
                freshness,
                fetch,
                unpack,
            })
        }
        .instrument(span)
        .await
    }
}
