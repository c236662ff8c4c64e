//! Development-time tracing.
//!
//! Diagnostics go to stderr so stdout stays usable from Makefiles and
//! scripts that capture resolved commands.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset and `--verbose` is given.
const VERBOSE_FILTER: &str = "dev_agents=debug";

/// Initialize the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or crate-level
/// `debug` when `verbose` is true.
///
/// # Example
/// ```bash
/// RUST_LOG=dev_agents=debug dev-agents task list
/// ```
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests in one process) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
