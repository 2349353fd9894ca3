//! Stable exit codes for the grader CLI.

use crate::error::{CheckError, find_check_error};

/// Report printed.
pub const OK: i32 = 0;
/// Missing input file, missing source, invalid config or any untagged error.
pub const INVALID: i32 = 1;
/// Checks file or a selector failed to parse.
pub const PARSE: i32 = 2;
/// Remote document could not be fetched; no report printed.
pub const FETCH_FAILED: i32 = 3;

/// Map an error to the exit code the CLI should return.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match find_check_error(err) {
        Some(CheckError::Parse(_)) => PARSE,
        Some(CheckError::RemoteFetch { .. }) => FETCH_FAILED,
        Some(CheckError::FileNotFound(_) | CheckError::MissingInput) | None => INVALID,
    }
}
