//! End-to-end tests for the prepare-crds pipeline over HTTP

#[cfg(test)]
mod tests {
    use crdprep_crds::*;
    use crdprep_errors::{Error, NetworkError};
    use crdprep_net::NetClient;
    use crdprep_types::{DownloadPolicy, FetchOutcome, FreshnessReason, UnpackOutcome};
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use httpmock::prelude::*;
    use tempfile::tempdir;

    fn crds_tarball() -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, body) in [
            (
                "crds/bases/cluster.karmada.io_clusters.yaml",
                &b"kind: CustomResourceDefinition\n"[..],
            ),
            (
                "crds/bases/policy.karmada.io_propagationpolicies.yaml",
                &b"kind: CustomResourceDefinition\n"[..],
            ),
        ] {
            let mut header = tar::Header::new_gnu();
            header.set_size(body.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, body).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    fn pipeline() -> PrepareCrds {
        PrepareCrds::new(NetClient::with_defaults().unwrap())
    }

    #[tokio::test]
    async fn test_repeat_run_fetches_once() {
        let server = MockServer::start();
        let body = crds_tarball();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/crds.tar.gz");
            then.status(200).body(&body);
        });

        let temp = tempdir().unwrap();
        let input = PrepareCrdsInput::new(server.url("/crds.tar.gz"), temp.path());
        let pipeline = pipeline();

        let first = pipeline.run(&input).await.unwrap();
        let second = pipeline.run(&input).await.unwrap();

        mock.assert_hits(1);
        assert!(first.fetch.fetched());
        assert_eq!(first.unpack, UnpackOutcome::Extracted { entries: 2 });
        assert_eq!(second.fetch, FetchOutcome::Skipped);
        assert_eq!(second.unpack, UnpackOutcome::AlreadyPresent);

        let cache = input.cache();
        let archive_len = std::fs::metadata(cache.archive_path()).unwrap().len();
        assert_eq!(archive_len, body.len() as u64);
        assert!(std::fs::read_dir(cache.crds_dir()).unwrap().next().is_some());
        assert_eq!(first.crds_dir, cache.crds_dir());
    }

    #[tokio::test]
    async fn test_corrupt_cache_self_heals() {
        let server = MockServer::start();
        let body = crds_tarball();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/crds.tar.gz");
            then.status(200).body(&body);
        });

        let temp = tempdir().unwrap();
        let input = PrepareCrdsInput::new(server.url("/crds.tar.gz"), temp.path());
        let cache = input.cache();
        std::fs::create_dir_all(cache.dir()).unwrap();
        std::fs::write(cache.archive_path(), b"").unwrap();
        std::fs::write(cache.dir().join("leftover.part"), b"junk").unwrap();

        let report = pipeline().run(&input).await.unwrap();

        mock.assert_hits(1);
        assert_eq!(
            report.freshness.reason,
            FreshnessReason::ArchiveMissingOrEmpty
        );
        assert!(matches!(
            report.fetch,
            FetchOutcome::Fetched {
                replaced_existing: true,
                ..
            }
        ));
        assert!(!cache.dir().join("leftover.part").exists());
        assert!(cache.crds_dir().join("bases").is_dir());
    }

    #[tokio::test]
    async fn test_always_policy_downloads_every_time() {
        let server = MockServer::start();
        let body = crds_tarball();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/crds.tar.gz");
            then.status(200).body(&body);
        });

        let temp = tempdir().unwrap();
        let input = PrepareCrdsInput::new(server.url("/crds.tar.gz"), temp.path())
            .with_policy(DownloadPolicy::Always);
        let pipeline = pipeline();

        pipeline.run(&input).await.unwrap();
        pipeline.run(&input).await.unwrap();

        mock.assert_hits(2);
    }

    #[tokio::test]
    async fn test_http_failure_leaves_no_archive() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/crds.tar.gz");
            then.status(500);
        });

        let temp = tempdir().unwrap();
        let input = PrepareCrdsInput::new(server.url("/crds.tar.gz"), temp.path());

        let error = pipeline().run(&input).await.unwrap_err();

        assert!(matches!(
            error,
            Error::Network(NetworkError::HttpError { status: 500, .. })
        ));
        let status = input.cache().inspect().await.unwrap();
        assert!(status.exists);
        assert_eq!(status.archive_size, None);
        assert!(!status.crds_present);
    }

    #[tokio::test]
    async fn test_trailing_slash_gets_its_own_entry() {
        let server = MockServer::start();
        let body = crds_tarball();
        let mock_plain = server.mock(|when, then| {
            when.method(GET).path("/crds");
            then.status(200).body(&body);
        });
        let mock_slash = server.mock(|when, then| {
            when.method(GET).path("/crds/");
            then.status(200).body(&body);
        });

        let temp = tempdir().unwrap();
        let plain = PrepareCrdsInput::new(server.url("/crds"), temp.path());
        let slash = PrepareCrdsInput::new(server.url("/crds/"), temp.path());
        let pipeline = pipeline();

        let a = pipeline.run(&plain).await.unwrap();
        let b = pipeline.run(&slash).await.unwrap();

        assert_ne!(a.cache_dir, b.cache_dir);
        mock_plain.assert_hits(1);
        mock_slash.assert_hits(1);
    }

    #[tokio::test]
    async fn test_inspect_and_remove() {
        let server = MockServer::start();
        let body = crds_tarball();
        server.mock(|when, then| {
            when.method(GET).path("/crds.tar.gz");
            then.status(200).body(&body);
        });

        let temp = tempdir().unwrap();
        let input = PrepareCrdsInput::new(server.url("/crds.tar.gz"), temp.path());
        let cache = input.cache();

        let before = cache.inspect().await.unwrap();
        assert!(!before.exists);

        pipeline().run(&input).await.unwrap();
        let after = cache.inspect().await.unwrap();
        assert!(after.exists);
        assert_eq!(after.archive_size, Some(body.len() as u64));
        assert!(after.crds_present);

        assert!(cache.remove().await.unwrap());
        assert!(!cache.remove().await.unwrap());
        assert!(!cache.dir().exists());
    }
}
