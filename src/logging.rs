//! Logging setup for the `folio` binary.
//!
//! Library modules only emit `tracing` events; this installs the subscriber.
//! Logs go to stderr so stdout stays clean for the rendered head fragment.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose`
/// and `warn` without, so link lint findings still surface.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbose, "logging initialized");
    }
}
