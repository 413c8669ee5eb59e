//! Logging and tracing configuration
//!
//! The relay runs without a terminal most of the time, so logs only go to
//! stderr and nothing is persisted. Dialogs stay the user-facing channel.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "cwm_relay=warn,warn";

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "cwm_relay=debug,warn";

/// Initialize tracing (stderr logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable, which takes
/// precedence over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
