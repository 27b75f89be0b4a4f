//! Opt-in tracing setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing from the `ROOKCTL_LOG` environment variable.
///
/// Logging is disabled by default; user-facing diagnostics go to plain
/// stderr, never through the logger. Set `ROOKCTL_LOG` to a filter
/// expression (`debug`, `rookctl=trace`, ...) to enable stderr logging.
pub fn init() {
    let Ok(directives) = std::env::var("ROOKCTL_LOG") else {
        return;
    };

    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
