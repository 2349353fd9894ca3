//! HTML selector presence checker.
//!
//! Given a checks file (a JSON array of CSS selectors) and an HTML document
//! from disk or a url, reports for every selector whether at least one
//! element matches. The architecture keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (check lists, selector
//!   evaluation, report rendering). No I/O.
//! - **[`io`]**: Side effects (input validation, file reads, remote fetches,
//!   configuration).
//!
//! [`check`] coordinates both and is shared by the CLI and library callers.

pub mod check;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
