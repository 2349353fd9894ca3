//! Deterministic, pure logic for a check run.
//!
//! Core modules perform no I/O. They operate on in-memory bytes and check
//! lists and return deterministic outputs suitable for tests.

pub mod checks;
pub mod evaluate;
pub mod report;
