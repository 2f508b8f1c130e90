// src/logging.rs
// =============================================================================
// Logger setup.
//
// Logs go to stderr so stdout only carries the report (important for
// --json). RUST_LOG wins when set; otherwise we only show warnings, or
// debug output for our own crate with -v.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "portfolio_sync=debug,warn"
    } else {
        "portfolio_sync=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init: a second call (e.g. from tests) is a no-op instead of a panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
