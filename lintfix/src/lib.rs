//! Regex-driven lint fixer for TypeScript source trees.
//!
//! Walks a root directory, applies an ordered set of textual rewrite rules to
//! every `.ts`/`.tsx` file, and writes back the files that changed. The crate
//! keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (rules, counters).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, traversal, file rewrite).
//!
//! [`fix`] coordinates the two to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod fix;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
