//! # Task Factory
//!
//! Builds [`Task`] values from a type tag plus loosely-typed JSON parameters,
//! mirroring what the activity platform sends on deploy. Unknown type tags
//! degrade silently to a simple task; that fallback is a documented policy of
//! the deploy contract, not an error path.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, TaskTrackError};
use crate::models::Task;

/// Default priority applied when the caller omits `priority`
pub const DEFAULT_PRIORITY: i64 = 1;

/// Default deadline offset applied when the caller omits `minutes_from_now`
pub const DEFAULT_MINUTES_FROM_NOW: i64 = 30;

/// Constructs task variants from a type tag and raw request parameters
///
/// The factory never touches the repository; storage is the manager's job.
#[derive(Debug, Default)]
pub struct TaskFactory;

impl TaskFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create a task of the requested type
    ///
    /// `task_type` is matched case-insensitively against `simple`,
    /// `priority`, and `deadline`; anything else (including the empty
    /// string) yields a simple task. `title` is required. Numeric
    /// parameters default when absent and are coerced to integers;
    /// fractional or non-numeric input is a validation error.
    pub fn create_task(&self, task_type: &str, params: &Map<String, Value>) -> Result<Task> {
        let title = required_title(params)?;

        let task = match task_type.to_ascii_lowercase().as_str() {
            "priority" => {
                let priority = coerce_integer(params, "priority", DEFAULT_PRIORITY)?;
                Task::priority(title, priority)
            }
            "deadline" => {
                let minutes = coerce_integer(params, "minutes_from_now", DEFAULT_MINUTES_FROM_NOW)?;
                Task::deadline(title, minutes)
            }
            "simple" => Task::simple(title),
            other => {
                debug!(task_type = other, "Unknown task type, falling back to simple");
                Task::simple(title)
            }
        };

        Ok(task)
    }
}

fn required_title(params: &Map<String, Value>) -> Result<String> {
    match params.get("title") {
        Some(Value::String(title)) => Ok(title.clone()),
        Some(_) => Err(TaskTrackError::invalid_parameter(
            "title",
            "must be a string",
        )),
        None => Err(TaskTrackError::MissingField("title".to_string())),
    }
}

/// Coerce a loosely-typed parameter to an integer
///
/// Accepts integral JSON numbers and strings that parse as integers.
/// Fractional numbers, booleans, and non-numeric strings are rejected so a
/// half-created task never reaches the repository.
fn coerce_integer(params: &Map<String, Value>, field: &str, default: i64) -> Result<i64> {
    match params.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(number)) => number.as_i64().ok_or_else(|| {
            TaskTrackError::invalid_parameter(field, "must be an integer")
        }),
        Some(Value::String(raw)) => raw.parse::<i64>().map_err(|_| {
            TaskTrackError::invalid_parameter(field, "must be an integer")
        }),
        Some(_) => Err(TaskTrackError::invalid_parameter(
            field,
            "must be an integer",
        )),
    }
}
