use axum::{extract::State, http::StatusCode, response::Json};
use common::PrecipitationByDate;
use tracing::{debug, error, instrument};
use crate::schemas::AppState;

/// Precipitation for every date in the last twelve months
///
/// One key per date. When a date has readings from several stations, the
/// last reading in table order is the one returned.
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    tag = "climate",
    responses(
        (status = 200, description = "Precipitation in inches keyed by date (YYYY-MM-DD)", body = PrecipitationByDate),
        (status = 500, description = "Window columns could not be read"),
    )
)]
#[instrument(skip(state))]
pub async fn get_precipitation(
    State(state): State<AppState>,
) -> Result<Json<PrecipitationByDate>, StatusCode> {
    match state.dataset.window().precipitation_by_date() {
        Ok(precipitation) => {
            debug!("Serving precipitation for {} dates", precipitation.len());
            Ok(Json(precipitation))
        }
        Err(e) => {
            error!("Failed to read precipitation: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
