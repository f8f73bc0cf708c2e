//! # TaskTrack Configuration System
//!
//! Layered configuration loading: built-in defaults, an optional config file
//! (pointed at by `TASKTRACK_CONFIG`), and `TASKTRACK_*` environment
//! overrides, in increasing precedence. Environment awareness mirrors the
//! deployment convention: `TASKTRACK_ENV` selects development/test/production
//! behavior (log levels, bind defaults).

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

use crate::error::Result;

/// Top-level service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskTrackConfig {
    /// Deployment environment: development, test, or production
    pub environment: String,

    /// Web server configuration
    pub web: WebConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebConfig {
    /// Address and port the HTTP server binds to
    pub bind_address: String,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for TaskTrackConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            web: WebConfig {
                bind_address: "0.0.0.0:5000".to_string(),
                request_timeout_ms: 10_000,
            },
        }
    }
}

impl TaskTrackConfig {
    /// Load configuration with environment auto-detection
    ///
    /// Precedence (lowest to highest): built-in defaults, the file named by
    /// `TASKTRACK_CONFIG` (if set), then `TASKTRACK_*` environment variables
    /// (e.g. `TASKTRACK_WEB__BIND_ADDRESS=127.0.0.1:8080`).
    pub fn load() -> Result<Self> {
        let environment = detect_environment();
        debug!(environment = %environment, "Loading TaskTrack configuration");

        let defaults = TaskTrackConfig::default();

        let mut builder = Config::builder()
            .set_default("environment", environment)?
            .set_default("web.bind_address", defaults.web.bind_address)?
            .set_default("web.request_timeout_ms", defaults.web.request_timeout_ms)?;

        if let Ok(path) = env::var("TASKTRACK_CONFIG") {
            builder = builder.add_source(File::with_name(&path));
        }

        builder = builder.add_source(Environment::with_prefix("TASKTRACK").separator("__"));

        let config: TaskTrackConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}

/// Detect the deployment environment from `TASKTRACK_ENV`
///
/// Defaults to `development` when unset.
pub fn detect_environment() -> String {
    env::var("TASKTRACK_ENV").unwrap_or_else(|_| "development".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_port_5000() {
        let config = TaskTrackConfig::default();
        assert_eq!(config.web.bind_address, "0.0.0.0:5000");
        assert_eq!(config.environment, "development");
        assert!(config.web.request_timeout_ms > 0);
    }

    #[test]
    fn load_without_file_or_env_uses_defaults() {
        let config = TaskTrackConfig::load().expect("defaults should always load");
        let defaults = TaskTrackConfig::default();
        assert_eq!(config.web.request_timeout_ms, defaults.web.request_timeout_ms);
    }
}
