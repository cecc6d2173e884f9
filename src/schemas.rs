use chrono::NaiveDate;
use common::{PrecipitationByDate, StationDto};
use compute::ClimateDataset;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool, used for live station queries
    pub db: DatabaseConnection,
    /// Observations loaded at startup, read-only for the life of the server
    pub dataset: Arc<ClimateDataset>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, dataset: ClimateDataset) -> Self {
        Self {
            db,
            dataset: Arc::new(dataset),
        }
    }
}

/// A named link shown on every HTML page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Every page the application serves, in navigation order.
pub const PAGES: [PageLink; 5] = [
    PageLink { name: "Home", url: "/" },
    PageLink {
        name: "Precipitation_for_All_Dates",
        url: "/Precipitation_for_All_Dates",
    },
    PageLink {
        name: "Histogram_SC00519281_12_months",
        url: "/Histogram_SC00519281_12_months",
    },
    PageLink {
        name: "Precipitation",
        url: "/api/v1.0/precipitation",
    },
    PageLink {
        name: "Stations",
        url: "/api/v1.0/stations",
    },
];

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
    /// Number of observations loaded at startup
    pub observations: usize,
    /// First day of the twelve month window
    pub window_start: NaiveDate,
    /// Last day of the twelve month window
    pub window_end: NaiveDate,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::precipitation::get_precipitation,
        crate::handlers::stations::get_stations,
    ),
    components(
        schemas(
            HealthResponse,
            PrecipitationByDate,
            StationDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "climate", description = "Climate observation endpoints"),
    ),
    info(
        title = "Climate API",
        description = "Precipitation and temperature observations from weather stations",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
