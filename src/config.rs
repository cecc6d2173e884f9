use anyhow::Result;
use compute::ClimateDataset;
use sea_orm::Database;
use tracing::info;

use crate::schemas::AppState;

/// Read-only SQLite database relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite?mode=ro";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Connect to the store and load the observation dataset.
///
/// Any failure here is fatal for the server: an unreachable store, an empty
/// measurement table or an unparsable date all abort startup.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    let dataset = ClimateDataset::load(&db).await?;

    Ok(AppState::new(db, dataset))
}

/// Get database URL from environment or use default
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
}
