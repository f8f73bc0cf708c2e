//! # Error Types
//!
//! Domain-level errors for task creation and configuration loading.
//! HTTP status mapping lives in the web layer (`web::response_types`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskTrackError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidParameter { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TaskTrackError {
    /// Create an InvalidParameter error with field context
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for TaskTrackError {
    fn from(err: config::ConfigError) -> Self {
        TaskTrackError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaskTrackError>;
