//! Download and unpack capabilities the pipeline delegates to

use async_trait::async_trait;
use crdprep_errors::Error;
use crdprep_net::{DownloadResult, NetClient};
use std::path::Path;

/// Fetch the bytes at a URL into a file
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str, dest: &Path) -> Result<DownloadResult, Error>;
}

/// Extract an archive into a directory, returning the number of entries
#[async_trait]
pub trait Unpacker: Send + Sync {
    async fn unpack(&self, archive: &Path, dest: &Path) -> Result<usize, Error>;
}

#[async_trait]
impl Downloader for NetClient {
    async fn download(&self, url: &str, dest: &Path) -> Result<DownloadResult, Error> {
        crdprep_net::download_file(self, url, dest).await
    }
}

/// Unpacks gzip-compressed tarballs
#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzUnpacker;

#[async_trait]
impl Unpacker for TarGzUnpacker {
    async fn unpack(&self, archive: &Path, dest: &Path) -> Result<usize, Error> {
        crdprep_archive::extract_tar_gz(archive, dest).await
    }
}
