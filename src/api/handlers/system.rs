use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use tracing::{error, info};

use crate::api::{state::AppState, types::*};
use crate::domain::dates;

/// GET /api/dates
///
/// The selectable window: today plus the next six days.
pub async fn get_dates() -> Json<DatesResponse> {
    Json(DatesResponse {
        dates: dates::upcoming_dates(dates::today()),
    })
}

/// POST /api/refresh
///
/// Clears the cache without fetching; the next predictions request
/// repopulates it.
pub async fn refresh_data(State(state): State<AppState>) -> (StatusCode, Json<RefreshResponse>) {
    info!("refresh requested; clearing prediction cache");
    match state.service.refresh().await {
        Ok(()) => (
            StatusCode::OK,
            Json(RefreshResponse {
                status: "success".to_string(),
                message: "Data refreshed successfully".to_string(),
                timestamp: Utc::now(),
            }),
        ),
        Err(err) => {
            error!(error = %err, "cache refresh failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RefreshResponse {
                    status: "error".to_string(),
                    message: err.to_string(),
                    timestamp: Utc::now(),
                }),
            )
        }
    }
}

/// GET /api/status
///
/// Informational only: reports `online` unless the introspection call itself
/// fails. No retry or recovery logic lives here.
pub async fn get_status(State(state): State<AppState>) -> (StatusCode, Json<StatusResponse>) {
    match state.service.last_refresh().await {
        Ok(last_refresh) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "online".to_string(),
                timestamp: Utc::now(),
                last_refresh,
                uptime_seconds: state.uptime_seconds(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                message: None,
            }),
        ),
        Err(err) => {
            error!(error = %err, "status introspection failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    status: "error".to_string(),
                    timestamp: Utc::now(),
                    last_refresh: None,
                    uptime_seconds: state.uptime_seconds(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    message: Some(err.to_string()),
                }),
            )
        }
    }
}

/// Liveness probe - is the process alive?
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
