//! # Task Repository
//!
//! Append-only in-memory store. Insertion order is creation order, and reads
//! hand out defensive clones so callers can never reach into internal state.
//! No deletion, update, or lookup-by-id: tasks live for the process lifetime.

use crate::models::Task;

#[derive(Debug, Default)]
pub struct TaskRepository {
    tasks: Vec<Task>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task; O(1), no duplicate detection
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// All stored tasks in insertion order, as a defensive copy
    pub fn get_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Number of stored tasks
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}
