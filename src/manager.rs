//! # Task Manager
//!
//! Coordinates the factory and the repository: every task in the system is
//! created through [`TaskManager::create_task`] and nowhere else. One manager
//! instance exists per process, constructed at startup and shared behind
//! `Arc<tokio::sync::RwLock<_>>` by the web state (single-writer contract for
//! concurrent transports).

use serde_json::{Map, Value};
use tracing::info;

use crate::error::Result;
use crate::factory::TaskFactory;
use crate::models::Task;
use crate::repository::TaskRepository;

#[derive(Debug, Default)]
pub struct TaskManager {
    factory: TaskFactory,
    repository: TaskRepository,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            factory: TaskFactory::new(),
            repository: TaskRepository::new(),
        }
    }

    /// Create a task via the factory and store it
    ///
    /// Atomic: a factory failure (missing title, bad coercion) leaves the
    /// repository untouched.
    pub fn create_task(&mut self, task_type: &str, params: &Map<String, Value>) -> Result<Task> {
        let task = self.factory.create_task(task_type, params)?;
        self.repository.add(task.clone());
        info!(
            task_type = task.kind.type_name(),
            title = %task.title,
            total = self.repository.count(),
            "Task created"
        );
        Ok(task)
    }

    /// Snapshot of all tasks in creation order
    pub fn tasks(&self) -> Vec<Task> {
        self.repository.get_all()
    }

    /// All tasks in wire representation
    pub fn list_tasks(&self) -> Vec<Value> {
        self.repository.get_all().iter().map(Task::to_json).collect()
    }

    pub fn count(&self) -> usize {
        self.repository.count()
    }
}
