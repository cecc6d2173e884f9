use crate::handlers::{
    health::health_check,
    pages::{histogram_last_12_months, index, precipitation_for_all_dates},
    precipitation::get_precipitation,
    stations::get_stations,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // HTML pages
        .route("/", get(index))
        .route("/Precipitation_for_All_Dates", get(precipitation_for_all_dates))
        .route("/Histogram_SC00519281_12_months", get(histogram_last_12_months))
        // JSON API
        .route("/api/v1.0/precipitation", get(get_precipitation))
        .route("/api/v1.0/stations", get(get_stations))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
