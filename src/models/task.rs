//! # Task Model
//!
//! Immutable-after-creation task records. The three task flavors (simple,
//! priority, deadline) are a closed tagged union rather than a class
//! hierarchy: variant payloads live on [`TaskKind`], and optional attributes
//! are surfaced through accessors returning `Option<T>` so sorting code never
//! has to probe for attribute presence.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::{json, Value};

/// Variant discriminator with variant-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    Simple,
    Priority { priority: i64 },
    Deadline { deadline: DateTime<Utc> },
}

impl TaskKind {
    /// Wire-level discriminator used in serialized task objects
    pub fn type_name(&self) -> &'static str {
        match self {
            TaskKind::Simple => "SimpleTask",
            TaskKind::Priority { .. } => "PriorityTask",
            TaskKind::Deadline { .. } => "DeadlineTask",
        }
    }
}

/// A single task tracked for a deployed activity
///
/// Tasks are created exactly once (via the factory), appended to the
/// repository, and never mutated or removed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub kind: TaskKind,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub done: bool,
}

impl Task {
    /// Create a simple task with no priority or deadline
    pub fn simple(title: String) -> Self {
        Self {
            kind: TaskKind::Simple,
            title,
            created_at: Utc::now(),
            done: false,
        }
    }

    /// Create a task carrying a priority level
    pub fn priority(title: String, priority: i64) -> Self {
        Self {
            kind: TaskKind::Priority { priority },
            title,
            created_at: Utc::now(),
            done: false,
        }
    }

    /// Create a task with a deadline `minutes_from_now` minutes after creation
    ///
    /// Non-positive values yield a deadline at or before the creation time;
    /// no clamping is performed.
    pub fn deadline(title: String, minutes_from_now: i64) -> Self {
        let created_at = Utc::now();
        Self {
            kind: TaskKind::Deadline {
                deadline: created_at + Duration::minutes(minutes_from_now),
            },
            title,
            created_at,
            done: false,
        }
    }

    /// Priority level, if this task carries one
    pub fn priority_level(&self) -> Option<i64> {
        match self.kind {
            TaskKind::Priority { priority } => Some(priority),
            _ => None,
        }
    }

    /// Deadline, if this task carries one
    pub fn deadline_at(&self) -> Option<DateTime<Utc>> {
        match self.kind {
            TaskKind::Deadline { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Serialize to the wire representation
    ///
    /// Single exhaustive function over the variant tag: the base shape
    /// (`type`, `title`, `created_at`, `done`) plus the variant's extra
    /// field when present.
    pub fn to_json(&self) -> Value {
        let mut data = json!({
            "type": self.kind.type_name(),
            "title": self.title,
            "created_at": format_timestamp(self.created_at),
            "done": self.done,
        });

        match self.kind {
            TaskKind::Simple => {}
            TaskKind::Priority { priority } => {
                data["priority"] = json!(priority);
            }
            TaskKind::Deadline { deadline } => {
                data["deadline"] = json!(format_timestamp(deadline));
            }
        }

        data
    }
}

/// ISO-8601 timestamp with microsecond precision and a literal trailing `Z`
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_task_serializes_base_shape_only() {
        let task = Task::simple("Ler capítulo 1".to_string());
        let data = task.to_json();

        assert_eq!(data["type"], "SimpleTask");
        assert_eq!(data["title"], "Ler capítulo 1");
        assert_eq!(data["done"], false);
        assert!(data.get("priority").is_none());
        assert!(data.get("deadline").is_none());
    }

    #[test]
    fn priority_task_serializes_priority_field() {
        let task = Task::priority("Entregar relatório".to_string(), 5);
        let data = task.to_json();

        assert_eq!(data["type"], "PriorityTask");
        assert_eq!(data["priority"], 5);
        assert_eq!(task.priority_level(), Some(5));
        assert_eq!(task.deadline_at(), None);
    }

    #[test]
    fn deadline_is_exactly_minutes_from_now_after_creation() {
        let task = Task::deadline("Rever notas".to_string(), 30);
        let deadline = task.deadline_at().expect("deadline task has a deadline");

        assert_eq!(deadline - task.created_at, Duration::minutes(30));
        assert!(deadline > task.created_at);
    }

    #[test]
    fn non_positive_minutes_give_deadline_not_after_creation() {
        let task = Task::deadline("Atrasada".to_string(), -5);
        let deadline = task.deadline_at().unwrap();
        assert!(deadline < task.created_at);

        let task = Task::deadline("Imediata".to_string(), 0);
        assert_eq!(task.deadline_at().unwrap(), task.created_at);
    }

    #[test]
    fn timestamps_carry_trailing_z() {
        let task = Task::deadline("Formato".to_string(), 10);
        let data = task.to_json();

        let created_at = data["created_at"].as_str().unwrap();
        let deadline = data["deadline"].as_str().unwrap();
        assert!(created_at.ends_with('Z'), "created_at was {created_at}");
        assert!(deadline.ends_with('Z'), "deadline was {deadline}");
    }
}
