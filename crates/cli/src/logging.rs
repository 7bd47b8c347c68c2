//! Tracing subscriber setup. Logs go to stderr so stdout stays clean.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "apod=info,apod_gateway=info,apod_client=info,tower_http=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter
/// unless `quiet` is set.
pub(crate) fn init(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
