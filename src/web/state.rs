//! # Web API Application State
//!
//! Shared state for the web API: the service configuration and the facade
//! over the single process-wide task manager.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::TaskTrackConfig;
use crate::facade::TaskTrackFacade;
use crate::manager::TaskManager;

/// Shared application state for the web API
///
/// Cloned into every handler; the task manager inside the facade is the one
/// shared instance for the process lifetime, mutation serialized behind an
/// `RwLock`.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<TaskTrackConfig>,

    /// Facade over the shared task manager and sort strategies
    pub facade: Arc<TaskTrackFacade>,
}

impl AppState {
    /// Create the application state with a fresh task manager
    pub fn new(config: Arc<TaskTrackConfig>) -> Self {
        info!(environment = %config.environment, "Creating TaskTrack application state");

        let manager = Arc::new(RwLock::new(TaskManager::new()));
        let facade = Arc::new(TaskTrackFacade::new(manager));

        Self { config, facade }
    }
}
