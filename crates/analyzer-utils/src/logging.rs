//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence; `fallback_level` applies when it is
/// unset (typically the configured log level, e.g. "info").
pub fn init_tracing(fallback_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback_level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
