// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the binary.
//!
//! The filter is read from `GIFT_NOTICE_LOG`, then `RUST_LOG`. Without
//! either, the crate logs at `info` (`debug` with `--verbose`) and
//! dependencies at `warn`. Output goes to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "GIFT_NOTICE_LOG";

/// Installs the global subscriber.
///
/// Calling it again is a no-op, so tests and embedders may call it freely.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(verbose, "tracing initialized");
    }
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "gift_notice=debug,warn"
    } else {
        "gift_notice=info,warn"
    }
}
