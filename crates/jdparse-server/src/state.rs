use std::sync::Arc;

use tokio::sync::RwLock;

use jdparse_core::api_types::BatchRunStatus;
use jdparse_core::AppConfig;
use jdparse_pipeline::BatchCoordinator;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub coordinator: Arc<BatchCoordinator>,
    pub runs: Arc<RwLock<Vec<BatchRunStatus>>>,
}
