use axum::{extract::State, http::StatusCode, response::Json};
use common::StationDto;
use compute::list_stations;
use tracing::{error, instrument};
use crate::schemas::AppState;

/// List all weather stations
///
/// Queried live from the database on every request.
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    tag = "climate",
    responses(
        (status = 200, description = "Stations in database order", body = Vec<StationDto>),
        (status = 500, description = "Station query failed"),
    )
)]
#[instrument(skip(state))]
pub async fn get_stations(State(state): State<AppState>) -> Result<Json<Vec<StationDto>>, StatusCode> {
    match list_stations(&state.db).await {
        Ok(stations) => Ok(Json(stations)),
        Err(e) => {
            error!("Failed to list stations: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
