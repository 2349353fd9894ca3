//! Test-only helpers: fixture files and a scripted fetcher.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::error::CheckError;
use crate::io::acquire::Fetcher;

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Temporary directory holding a checks file and an html page.
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub checks_path: PathBuf,
    pub html_path: PathBuf,
}

impl Fixture {
    pub fn new(checks: &str, html: &str) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let checks_path = write_fixture(dir.path(), "checks.json", checks);
        let html_path = write_fixture(dir.path(), "index.html", html);
        Ok(Self {
            dir,
            checks_path,
            html_path,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Canned response for [`ScriptedFetcher`].
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Body(Vec<u8>),
    Failure(String),
}

/// Fetcher that returns a fixed response and records requested urls.
#[derive(Debug)]
pub struct ScriptedFetcher {
    response: ScriptedResponse,
    calls: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn ok(body: &str) -> Self {
        Self {
            response: ScriptedResponse::Body(body.as_bytes().to_vec()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: ScriptedResponse::Failure(reason.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.borrow_mut().push(url.to_string());
        match &self.response {
            ScriptedResponse::Body(body) => Ok(body.clone()),
            ScriptedResponse::Failure(reason) => Err(anyhow!(CheckError::RemoteFetch {
                url: url.to_string(),
                reason: reason.clone(),
            })),
        }
    }
}
