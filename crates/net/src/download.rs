//! Streaming download to a local file

use crate::client::NetClient;
use crdprep_errors::{Error, NetworkError};
use crdprep_hash::{Hash, Hasher};
use futures::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Result of a download operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub hash: Hash,
    pub size: u64,
}

/// Stream the body at `url` into `dest`.
///
/// A partially written `dest` is removed when the transfer fails so that a
/// truncated file never survives as a plausible archive.
pub(crate) async fn stream_to_file(
    client: &NetClient,
    url: &str,
    dest: &Path,
) -> Result<DownloadResult, Error> {
    match write_body(client, url, dest).await {
        Ok(result) => Ok(result),
        Err(err) => {
            if let Err(cleanup) = tokio::fs::remove_file(dest).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        dest = %dest.display(),
                        error = %cleanup,
                        "failed to remove partial download"
                    );
                }
            }
            Err(err)
        }
    }
}

async fn write_body(client: &NetClient, url: &str, dest: &Path) -> Result<DownloadResult, Error> {
    let response = client.get(url).await.map_err(|e| with_dest(e, dest))?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::HttpError {
            url: url.to_string(),
            status: status.as_u16(),
            message: status.to_string(),
        }
        .into());
    }

    tracing::debug!(
        url,
        dest = %dest.display(),
        content_length = ?response.content_length(),
        "streaming response body"
    );

    let mut file = File::create(dest)
        .await
        .map_err(|e| Error::io_with_path(&e, dest))?;
    let mut stream = response.bytes_stream();
    let mut hasher = Hasher::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| download_failed(url, dest, &e.to_string()))?;
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::io_with_path(&e, dest))?;
        hasher.update(&chunk);
    }

    file.flush()
        .await
        .map_err(|e| Error::io_with_path(&e, dest))?;
    file.sync_all()
        .await
        .map_err(|e| Error::io_with_path(&e, dest))?;

    let size = hasher.bytes_hashed();
    let hash = hasher.finalize();
    tracing::debug!(dest = %dest.display(), size, sha256 = %hash, "download complete");
    Ok(DownloadResult { hash, size })
}

fn download_failed(url: &str, dest: &Path, message: &str) -> Error {
    NetworkError::DownloadFailed {
        url: url.to_string(),
        dest: dest.display().to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Fill in the destination on errors raised before it was known
fn with_dest(err: Error, dest: &Path) -> Error {
    match err {
        Error::Network(NetworkError::DownloadFailed { url, message, .. }) => {
            download_failed(&url, dest, &message)
        }
        other => other,
    }
}
