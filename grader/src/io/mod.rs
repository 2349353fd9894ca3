//! I/O helpers for a check run.

pub mod acquire;
pub mod checks_file;
pub mod config;
pub mod inputs;
