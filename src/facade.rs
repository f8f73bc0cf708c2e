//! # TaskTrack Facade
//!
//! Single boundary between the HTTP transport and the task domain. Composes
//! the shared [`TaskManager`] with the sort strategies to answer each use
//! case: deploy (create a task), list (sorted), strategy discovery, and the
//! mock analytics contract.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::manager::TaskManager;
use crate::models::Task;
use crate::sorting::SortStrategy;

/// Activity name reported by the descriptive endpoints
pub const ACTIVITY_NAME: &str = "TaskTrack";

/// Title applied when a deploy request carries none
pub const DEFAULT_DEPLOY_TITLE: &str = "Tarefa inicial do plano";

const DEFAULT_ACTIVITY_ID: &str = "activity-123";
const DEFAULT_USER_ID: &str = "user-abc";

/// Status envelope returned by a successful deploy
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub status: String,
    pub message: String,
    pub created_task: Value,
}

/// Sorted task listing with the strategy actually applied
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Value>,
    pub count: usize,
    pub sorted_by: String,
}

/// Fixed catalogue of the available sort strategies
#[derive(Debug, Serialize, PartialEq)]
pub struct SortStrategiesResponse {
    pub available_strategies: Vec<&'static str>,
    pub description: BTreeMap<&'static str, &'static str>,
}

/// Descriptor of one analytics metric the activity can report
#[derive(Debug, Serialize, PartialEq)]
pub struct AnalyticsDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub value_type: &'static str,
}

/// Fixed list of analytics the activity offers
#[derive(Debug, Serialize, PartialEq)]
pub struct AnalyticsListResponse {
    pub activity: &'static str,
    pub analytics: Vec<AnalyticsDescriptor>,
}

/// Mock metric values for one activity/user pair
#[derive(Debug, Serialize)]
pub struct MetricValues {
    pub tasks_created: i64,
    pub tasks_completed: i64,
    pub tasks_completed_on_time: i64,
    pub total_time_minutes: f64,
    pub completion_rate: f64,
}

/// Analytics report for one activity/user pair
#[derive(Debug, Serialize)]
pub struct AnalyticsReport {
    #[serde(rename = "activityID")]
    pub activity_id: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub metrics: MetricValues,
}

/// Entry point composing manager and sorter for each use case
#[derive(Debug, Clone)]
pub struct TaskTrackFacade {
    manager: Arc<RwLock<TaskManager>>,
}

impl TaskTrackFacade {
    pub fn new(manager: Arc<RwLock<TaskManager>>) -> Self {
        Self { manager }
    }

    /// Create one task from a deploy request body
    ///
    /// Missing fields take the platform defaults (`title`, `task_type`,
    /// `priority`, `minutes_from_now`); coercion failures propagate without
    /// storing anything.
    pub async fn deploy_activity(&self, data: &Value) -> Result<DeployResponse> {
        let body = data.as_object().cloned().unwrap_or_default();

        let task_type = body
            .get("task_type")
            .and_then(Value::as_str)
            .unwrap_or("simple")
            .to_string();
        let title = body
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_DEPLOY_TITLE);

        let mut params = Map::new();
        params.insert("title".to_string(), json!(title));
        for field in ["priority", "minutes_from_now"] {
            if let Some(value) = body.get(field) {
                params.insert(field.to_string(), value.clone());
            }
        }

        let task = self.manager.write().await.create_task(&task_type, &params)?;

        Ok(DeployResponse {
            status: "ok".to_string(),
            message: format!("Instância de {ACTIVITY_NAME} criada."),
            created_task: task.to_json(),
        })
    }

    /// List all tasks ordered by the requested strategy
    ///
    /// `sorted_by` reports the strategy actually applied, after fallback
    /// resolution of unknown keys.
    pub async fn list_tasks(&self, sort_by: &str) -> TaskListResponse {
        let strategy = SortStrategy::resolve(sort_by);
        debug!(requested = sort_by, resolved = strategy.name(), "Listing tasks");

        let tasks = self.manager.read().await.tasks();
        let sorted = strategy.sort(&tasks);
        let tasks: Vec<Value> = sorted.iter().map(Task::to_json).collect();

        TaskListResponse {
            count: tasks.len(),
            tasks,
            sorted_by: strategy.name().to_string(),
        }
    }

    /// The fixed strategy catalogue; independent of task state
    pub fn sort_strategies(&self) -> SortStrategiesResponse {
        SortStrategiesResponse {
            available_strategies: SortStrategy::ALL.iter().map(|s| s.name()).collect(),
            description: SortStrategy::ALL
                .iter()
                .map(|s| (s.name(), s.description()))
                .collect(),
        }
    }

    /// The fixed analytics descriptor list; independent of task state
    pub fn analytics_list(&self) -> AnalyticsListResponse {
        AnalyticsListResponse {
            activity: ACTIVITY_NAME,
            analytics: vec![
                AnalyticsDescriptor {
                    name: "tasks_created",
                    label: "Tarefas criadas",
                    value_type: "integer",
                },
                AnalyticsDescriptor {
                    name: "tasks_completed",
                    label: "Tarefas concluidas",
                    value_type: "integer",
                },
                AnalyticsDescriptor {
                    name: "tasks_completed_on_time",
                    label: "Concluidas dentro do prazo",
                    value_type: "integer",
                },
                AnalyticsDescriptor {
                    name: "total_time_minutes",
                    label: "Tempo total (minutos)",
                    value_type: "number",
                },
                AnalyticsDescriptor {
                    name: "completion_rate",
                    label: "Taxa de conclusao (%)",
                    value_type: "number",
                },
            ],
        }
    }

    /// Mock analytics for one activity/user pair
    ///
    /// Values are fixed and deliberately not derived from the repository:
    /// the upstream contract reports them independently of task state.
    pub fn generate_analytics(&self, activity_id: &str, user_id: &str) -> AnalyticsReport {
        AnalyticsReport {
            activity_id: activity_id.to_string(),
            user_id: user_id.to_string(),
            metrics: MetricValues {
                tasks_created: 5,
                tasks_completed: 4,
                tasks_completed_on_time: 3,
                total_time_minutes: 27.5,
                completion_rate: 80.0,
            },
        }
    }

    /// Default ids applied when an analytics request omits them
    pub fn default_analytics_ids() -> (&'static str, &'static str) {
        (DEFAULT_ACTIVITY_ID, DEFAULT_USER_ID)
    }
}
