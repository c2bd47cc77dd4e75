//! Deterministic, pure logic shared by the fixer.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and counters and return deterministic outputs suitable for tests.

pub mod rules;
pub mod summary;
