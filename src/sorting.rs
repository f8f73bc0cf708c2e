//! # Sort Strategies
//!
//! Closed set of interchangeable task orderings, selected by a string key at
//! call time. Unknown keys resolve to the `default` (insertion-order)
//! strategy rather than erroring, matching the platform contract. All sorts
//! are stable and operate on a fresh copy of the input.

use chrono::{DateTime, Utc};
use std::cmp::Reverse;

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Descending by priority; tasks without one sort as priority 0
    Priority,
    /// Ascending by deadline; tasks without one sort last
    Deadline,
    /// Descending by creation time
    Creation,
    /// Insertion order, untouched
    Default,
}

impl SortStrategy {
    /// Every available strategy, in presentation order
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::Priority,
        SortStrategy::Deadline,
        SortStrategy::Creation,
        SortStrategy::Default,
    ];

    /// Resolve a strategy from its key, case-insensitively
    ///
    /// Unrecognized keys fall back to [`SortStrategy::Default`].
    pub fn resolve(key: &str) -> Self {
        match key.to_ascii_lowercase().as_str() {
            "priority" => SortStrategy::Priority,
            "deadline" => SortStrategy::Deadline,
            "creation" => SortStrategy::Creation,
            _ => SortStrategy::Default,
        }
    }

    /// The key this strategy is selected by
    pub fn name(&self) -> &'static str {
        match self {
            SortStrategy::Priority => "priority",
            SortStrategy::Deadline => "deadline",
            SortStrategy::Creation => "creation",
            SortStrategy::Default => "default",
        }
    }

    /// Human-readable description served by the sort-strategies endpoint
    pub fn description(&self) -> &'static str {
        match self {
            SortStrategy::Priority => "Ordena por prioridade (maior primeiro)",
            SortStrategy::Deadline => "Ordena por deadline (mais urgente primeiro)",
            SortStrategy::Creation => "Ordena por data de criacao (mais recente primeiro)",
            SortStrategy::Default => "Ordem de insercao (sem ordenacao)",
        }
    }

    /// Return a newly ordered copy of `tasks`
    ///
    /// Stable: tasks comparing equal keep their relative input order. The
    /// input slice is never mutated.
    pub fn sort(&self, tasks: &[Task]) -> Vec<Task> {
        let mut sorted = tasks.to_vec();
        match self {
            SortStrategy::Priority => {
                sorted.sort_by_key(|task| Reverse(task.priority_level().unwrap_or(0)));
            }
            SortStrategy::Deadline => {
                sorted.sort_by_key(|task| {
                    task.deadline_at().unwrap_or(DateTime::<Utc>::MAX_UTC)
                });
            }
            SortStrategy::Creation => {
                sorted.sort_by_key(|task| Reverse(task.created_at));
            }
            SortStrategy::Default => {}
        }
        sorted
    }
}
