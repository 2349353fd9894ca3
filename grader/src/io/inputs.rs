//! Invocation inputs and local path validation.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::CheckError;
use crate::io::acquire::DocumentSource;

pub const CHECKS_FILE_DEFAULT: &str = "checks.json";
pub const HTML_FILE_DEFAULT: &str = "index.html";

/// Fail with [`CheckError::FileNotFound`] unless `path` exists.
pub fn validate_local_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CheckError::FileNotFound(path.to_path_buf()).into());
    }
    Ok(path.to_path_buf())
}

/// The three inputs of a run, fixed once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationInputs {
    pub checks_path: PathBuf,
    pub html_path: Option<PathBuf>,
    pub url: Option<String>,
}

impl InvocationInputs {
    pub fn new(checks_path: impl Into<PathBuf>, html_path: Option<PathBuf>, url: Option<String>) -> Self {
        Self {
            checks_path: checks_path.into(),
            html_path,
            url,
        }
    }

    /// Resolve CLI-style inputs, validating every local path that will be used.
    ///
    /// An explicitly supplied html path is validated even when a url wins.
    /// Without a url, the html path falls back to [`HTML_FILE_DEFAULT`].
    pub fn resolve(checks_path: PathBuf, html_path: Option<PathBuf>, url: Option<String>) -> Result<Self> {
        let checks_path = validate_local_path(&checks_path)?;
        let html_path = match (html_path, &url) {
            (Some(path), _) => Some(validate_local_path(&path)?),
            (None, None) => Some(validate_local_path(Path::new(HTML_FILE_DEFAULT))?),
            (None, Some(_)) => None,
        };
        Ok(Self {
            checks_path,
            html_path,
            url,
        })
    }

    /// Pick the acquisition source; the url wins over the html path.
    pub fn source(&self) -> Result<DocumentSource> {
        if let Some(url) = &self.url {
            return Ok(DocumentSource::Url(url.clone()));
        }
        match &self.html_path {
            Some(path) => Ok(DocumentSource::File(path.clone())),
            None => Err(CheckError::MissingInput.into()),
        }
    }
}
