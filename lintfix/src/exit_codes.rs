//! Stable exit codes for lintfix CLI commands.

/// Run completed; for `check`, nothing would change.
pub const OK: i32 = 0;
/// Invalid config, or a file could not be read or written.
pub const INVALID: i32 = 1;
/// `lintfix check` found files that `lintfix fix` would rewrite.
pub const PENDING: i32 = 2;
