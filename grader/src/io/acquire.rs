//! Document acquisition from a local file or a remote url.
//!
//! Local reads are synchronous. Remote reads go through the [`Fetcher`]
//! trait so orchestration can be tested without a network; [`HttpFetcher`]
//! is the `reqwest` backed implementation used by the CLI.

use std::fs;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use reqwest::redirect::Policy;
use tracing::{error, info, instrument, warn};

use crate::error::CheckError;
use crate::io::config::GraderConfig;

/// Where the document bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

/// Abstraction over remote document retrieval.
pub trait Fetcher {
    /// GET `url` and return the response body, whatever the status code.
    ///
    /// Transport and body read failures must carry a [`CheckError::RemoteFetch`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>>;
}

/// Fetcher backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &GraderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .context("build http client")?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("calling remote fetch");
        let response = self.client.get(url).send().await.map_err(|err| {
            error!(error = %err, "request failed");
            remote_error(url, err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                %status,
                headers = ?response.headers(),
                "remote returned non-success status, checking body anyway"
            );
        }

        let body = response.bytes().await.map_err(|err| {
            error!(error = %err, %status, "reading response body failed");
            remote_error(url, err.to_string())
        })?;
        info!(bytes = body.len(), "remote fetch complete");
        Ok(body.to_vec())
    }
}

fn remote_error(url: &str, reason: String) -> anyhow::Error {
    anyhow!(CheckError::RemoteFetch {
        url: url.to_string(),
        reason,
    })
}

/// Read a local html file.
pub fn read_local(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => anyhow!(CheckError::FileNotFound(path.to_path_buf())),
        _ => anyhow!(err).context(format!("read html {}", path.display())),
    })
}

/// Obtain document bytes for `source`.
///
/// Only the url branch suspends; the file branch completes without awaiting.
pub async fn acquire<F: Fetcher>(source: &DocumentSource, fetcher: &F) -> Result<Vec<u8>> {
    match source {
        DocumentSource::File(path) => {
            info!(path = %path.display(), "file path informed, start local checking");
            read_local(path)
        }
        DocumentSource::Url(url) => {
            info!(url, "url informed, start online checking");
            fetcher.fetch(url).await
        }
    }
}
