//! Diagnostics for a lintfix run, written to stderr through `tracing`.
//!
//! Stdout carries only the product output (`Fixed: <path>` lines and the
//! summary), so it stays stable for scripts whatever `RUST_LOG` says.
//!
//! What each level shows:
//!
//! - `warn` (default): a root that is missing or not a directory, and files
//!   skipped under `on_error = "continue"`.
//! - `info`: the resolved root and rule ids at start, final counters at end.
//! - `debug`: every candidate path and its per-file state and fix count.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber, filtered by `RUST_LOG` (`warn` if unset).
///
/// ```bash
/// RUST_LOG=lintfix=debug lintfix check --root apps/web/src
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
