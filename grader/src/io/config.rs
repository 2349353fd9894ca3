//! Grader configuration read from `grader.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_DEFAULT: &str = "grader.toml";

/// Grader configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GraderConfig {
    /// Wall-clock limit for fetching a remote document, in seconds.
    pub fetch_timeout_secs: u64,

    /// `User-Agent` header sent with remote fetches.
    pub user_agent: String,

    /// Maximum number of redirects followed before the fetch fails.
    pub max_redirects: usize,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 30,
            user_agent: concat!("grader/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: 10,
        }
    }
}

impl GraderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(anyhow!("fetch_timeout_secs must be > 0"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(anyhow!("user_agent must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GraderConfig::default()`.
pub fn load_config(path: &Path) -> Result<GraderConfig> {
    if !path.exists() {
        let cfg = GraderConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GraderConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
