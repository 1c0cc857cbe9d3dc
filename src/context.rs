use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::WorkTrackerService;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub work_tracker: Arc<dyn WorkTrackerService>,
}

impl AppContext {
    pub fn new(config: AppConfig, work_tracker: Arc<dyn WorkTrackerService>) -> Self {
        Self {
            config,
            work_tracker,
        }
    }
}
