//! Handlers for the `/measurements` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pantry_db::models::measurement::CreateMeasurement;
use pantry_db::repositories::MeasurementRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/measurements
///
/// List all measurement units in insertion order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let measurements = MeasurementRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: measurements }))
}

/// POST /api/v1/measurements
///
/// Create a new measurement unit.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMeasurement>,
) -> AppResult<impl IntoResponse> {
    let measurement = MeasurementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: measurement })))
}
