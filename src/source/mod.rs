//! Retrieval of raw template bytes from a local file or URL

use std::path::Path;

use thiserror::Error;
use tracing::debug;
use url::Url;

/// Template source error type
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read the file {path:?}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("the provided path {0:?} is a directory, not a file")]
    IsDirectory(String),

    #[error("cannot fetch the template from {url:?}: {source}")]
    Unreachable { url: String, source: reqwest::Error },

    #[error("cannot read the file {0:?}")]
    NotFound(String),
}

/// Load raw template bytes from a file path or an http(s) URL.
pub async fn load(location: &str) -> Result<Vec<u8>, SourceError> {
    let path = Path::new(location);

    if path.is_file() {
        debug!(path = %location, "reading template file");
        return tokio::fs::read(path).await.map_err(|source| SourceError::Unreadable {
            path: location.to_string(),
            source,
        });
    }

    if path.is_dir() {
        return Err(SourceError::IsDirectory(location.to_string()));
    }

    if let Ok(url) = Url::parse(location) {
        if matches!(url.scheme(), "http" | "https") {
            debug!(url = %url, "fetching template");
            return fetch(url).await;
        }
    }

    Err(SourceError::NotFound(location.to_string()))
}

async fn fetch(url: Url) -> Result<Vec<u8>, SourceError> {
    let unreachable = |source| SourceError::Unreachable {
        url: url.to_string(),
        source,
    };

    let resp = reqwest::get(url.clone())
        .await
        .and_then(|r| r.error_for_status())
        .map_err(unreachable)?;

    let body = resp.bytes().await.map_err(unreachable)?;
    Ok(body.to_vec())
}
