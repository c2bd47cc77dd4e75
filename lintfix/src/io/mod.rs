//! I/O helpers for fixer commands.

pub mod config;
pub mod source_file;
pub mod walker;
