use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Prediction endpoints
        .route("/api/predictions", get(handlers::get_predictions))
        .route("/api/prediction/:game_id", get(handlers::get_prediction))
        // Date browsing
        .route("/api/dates", get(handlers::get_dates))
        // Cache control
        .route("/api/refresh", post(handlers::refresh_data))
        // Introspection
        .route("/api/status", get(handlers::get_status))
        .route("/healthz", get(handlers::liveness))
        // Add state and CORS
        .with_state(state)
        .layer(cors)
}
