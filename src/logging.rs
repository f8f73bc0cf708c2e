//! # Structured Logging Module
//!
//! Environment-aware structured logging for the TaskTrack service.
//! Initialization is idempotent so tests and the server binary can both
//! call it without stepping on each other.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific defaults
///
/// Respects `RUST_LOG` when set; otherwise defaults to `info` in production
/// and `debug` everywhere else (environment detected via `TASKTRACK_ENV`).
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = crate::config::detect_environment();
        let default_level = match environment.as_str() {
            "production" => "info",
            _ => "debug",
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        // Don't panic if a subscriber is already installed (test harnesses)
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_filter(filter),
            )
            .try_init();
    });
}
