//! Failure taxonomy for a check run.
//!
//! Errors travel as `anyhow::Error`; a [`CheckError`] somewhere in the chain
//! decides the exit code (see [`crate::exit_codes::for_error`]).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// A local input (checks file or html file) is missing.
    #[error("{} does not exist. Exiting.", .0.display())]
    FileNotFound(PathBuf),

    /// Neither an html path nor a url was supplied.
    #[error("expected parameter file or url")]
    MissingInput,

    /// Checks file or selector could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The remote document could not be fetched.
    #[error("fetch {url} failed: {reason}")]
    RemoteFetch { url: String, reason: String },
}

impl CheckError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Find the first [`CheckError`] in an error chain.
pub fn find_check_error(err: &anyhow::Error) -> Option<&CheckError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CheckError>())
}
