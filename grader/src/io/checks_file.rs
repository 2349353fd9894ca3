//! Checks file loading with schema validation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;

use crate::core::checks::CheckList;
use crate::error::CheckError;

const CHECKS_SCHEMA: &str = include_str!("../../schemas/checks.schema.json");

/// Read a JSON array of selectors from disk and return it sorted.
pub fn load_checks(path: &Path) -> Result<CheckList> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => anyhow!(CheckError::FileNotFound(path.to_path_buf())),
        _ => anyhow!(err).context(format!("read checks {}", path.display())),
    })?;
    parse_checks(&bytes).with_context(|| format!("load checks {}", path.display()))
}

/// Parse checks from raw JSON bytes.
pub fn parse_checks(bytes: &[u8]) -> Result<CheckList> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| CheckError::parse(format!("checks are not valid json: {err}")))?;
    validate_shape(&value)?;
    let selectors: Vec<String> = serde_json::from_value(value)
        .map_err(|err| CheckError::parse(format!("checks are not a list of strings: {err}")))?;
    Ok(CheckList::new(selectors))
}

fn validate_shape(value: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(CHECKS_SCHEMA).context("parse checks schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages = compiled
        .iter_errors(value)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        return Err(CheckError::parse(format!(
            "checks schema validation failed: {}",
            messages.join("; ")
        ))
        .into());
    }
    Ok(())
}
