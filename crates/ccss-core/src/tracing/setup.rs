//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the CCSS tracing/logging system.
///
/// Reads the `CCSS_LOG` environment variable for per-crate log levels.
/// Format: `CCSS_LOG=ccss_core=debug,ccss_scoring=trace`
///
/// Falls back to `ccss=info` if `CCSS_LOG` is not set or is invalid.
/// Only the first call in a process installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, LogFormat::Pretty);
}

/// Initialize tracing from a [`LoggingConfig`] (usually from `ccss.toml`).
///
/// An invalid filter string falls back to `ccss=info`.
pub fn init_tracing_with_config(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(config.effective_filter())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter, config.effective_format());
}

fn install(filter: EnvFilter, format: LogFormat) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // Another subscriber may already be installed by the host application.
        let _ = match format {
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_target(true))
                .try_init(),
        };
    });
}
