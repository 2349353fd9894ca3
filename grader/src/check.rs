//! Orchestration for a single check run.
//!
//! Both entry points, the CLI and library callers, go through
//! [`check_html_file`]. It loads the checks, acquires the document and
//! evaluates every selector; printing the result is left to the caller.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::checks::CheckList;
use crate::core::evaluate::evaluate;
use crate::core::report::ResultMapping;
use crate::io::acquire::{DocumentSource, Fetcher, acquire};
use crate::io::checks_file::load_checks;
use crate::io::inputs::{InvocationInputs, validate_local_path};

/// Evaluate loaded checks against already acquired document bytes.
pub fn check_html_buffer(bytes: &[u8], checks: &CheckList) -> Result<ResultMapping> {
    debug!(bytes = bytes.len(), "starting buffer check");
    let mapping = evaluate(bytes, checks).context("evaluate checks")?;
    info!(
        checks = checks.len(),
        present = mapping.iter().filter(|(_, present)| *present).count(),
        "checks evaluated"
    );
    Ok(mapping)
}

/// Run the whole check: resolve the source, load checks, acquire, evaluate.
///
/// Checks are loaded before the document is acquired so a broken checks file
/// never costs a network round trip.
pub async fn check_html_file<F: Fetcher>(
    inputs: &InvocationInputs,
    fetcher: &F,
) -> Result<ResultMapping> {
    let source = inputs.source()?;
    validate_local_path(&inputs.checks_path)?;
    if let DocumentSource::File(path) = &source {
        validate_local_path(path)?;
    }

    let checks = load_checks(&inputs.checks_path)?;
    debug!(checks = checks.len(), "checks loaded");

    let bytes = acquire(&source, fetcher).await?;
    check_html_buffer(&bytes, &checks)
}
