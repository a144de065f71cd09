#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Network operations for crdprep
//!
//! This crate streams remote archives to local files. Requests are made once;
//! retry policy belongs to whoever invokes the download.

mod client;
mod download;

pub use client::{NetClient, NetConfig};
pub use download::DownloadResult;

use crdprep_errors::{Error, NetworkError};
use std::path::Path;
use url::Url;

/// Download a file, streaming it to `dest`
///
/// # Errors
///
/// Returns an error if the URL is invalid, the server answers with a non-success
/// status, or the body cannot be fully written to `dest`.
pub async fn download_file(
    client: &NetClient,
    url: &str,
    dest: &Path,
) -> Result<DownloadResult, Error> {
    parse_url(url)?;
    download::stream_to_file(client, url, dest).await
}

/// Parse and validate a URL
///
/// # Errors
///
/// Returns an error if the URL string is malformed or invalid according to RFC 3986.
pub fn parse_url(url: &str) -> Result<Url, Error> {
    Url::parse(url).map_err(|e| NetworkError::InvalidUrl(format!("{url}: {e}")).into())
}
