use crate::controller::DashboardController;
use crate::gateway::FeedbackApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<DashboardController>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn FeedbackApi>) -> Self {
        Self {
            controller: Arc::new(DashboardController::new(gateway)),
        }
    }
}
