use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use tracing::warn;

use crate::api::{state::AppState, types::*};
use crate::domain::{dates, Prediction, PredictionKind};

/// The single decision point for malformed or missing `date` values:
/// substitute today and log, never error.
fn resolve_date(raw: Option<&str>) -> NaiveDate {
    match raw {
        None => dates::today(),
        Some(value) => dates::parse_date(value).unwrap_or_else(|err| {
            warn!(error = %err, "falling back to today's date");
            dates::today()
        }),
    }
}

/// Same policy for the `type` parameter: unknown markets get the default.
fn resolve_kind(raw: Option<&str>) -> PredictionKind {
    match raw {
        None => PredictionKind::default(),
        Some(value) => value.parse().unwrap_or_else(|err| {
            warn!(raw = value, error = err, "falling back to default prediction type");
            PredictionKind::default()
        }),
    }
}

/// GET /api/predictions?date=YYYY-MM-DD&type=...&refresh=bool
///
/// Never fails and never returns an empty array; degraded serving is only
/// visible in the logs.
pub async fn get_predictions(
    State(state): State<AppState>,
    Query(query): Query<PredictionsQuery>,
) -> Json<Vec<Prediction>> {
    let date = resolve_date(query.date.as_deref());
    let kind = resolve_kind(query.kind.as_deref());
    let force = query.refresh.unwrap_or(false);

    Json(state.service.predictions(kind, date, force).await)
}

/// GET /api/prediction/:game_id?refresh=bool
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
    Query(query): Query<PredictionQuery>,
) -> std::result::Result<Json<Prediction>, (StatusCode, Json<ErrorBody>)> {
    let force = query.refresh.unwrap_or(false);

    state
        .service
        .prediction_by_id(game_id, force)
        .await
        .map(Json)
        .map_err(|err| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
        })
}
