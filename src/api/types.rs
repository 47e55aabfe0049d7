use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UpcomingDate;

// ============================================================================
// Query Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PredictionsQuery {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub refresh: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionQuery {
    pub refresh: Option<bool>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DatesResponse {
    pub dates: Vec<UpcomingDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub last_refresh: Option<DateTime<Utc>>,
    pub uptime_seconds: i64,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
