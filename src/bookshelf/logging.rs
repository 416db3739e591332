//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing`; user-facing output never does.
//! `RUST_LOG` takes precedence over the verbosity flag.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

static INIT_ONCE: Once = Once::new();

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "bookshelf=debug"
    } else {
        "bookshelf=warn"
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        // Another subscriber may already be installed (e.g. by a test harness).
        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish()
            .try_init()
        {
            tracing::debug!(error = %e, "keeping existing subscriber");
        }
    });
}
