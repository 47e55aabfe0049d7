use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::services::PredictionService;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Long-lived retrieval service, injected once at startup
    pub service: Arc<PredictionService>,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: Arc<PredictionService>) -> Self {
        Self {
            service,
            start_time: Utc::now(),
        }
    }

    /// Get system uptime in seconds
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
