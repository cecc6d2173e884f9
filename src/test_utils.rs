#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use compute::ClimateDataset;
    use model::entities::{measurement, prelude::*, station};
    use sea_orm::{
        ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema, Set,
    };
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Measurements seeded by [`setup_test_app_state`]: `(station, date, prcp, tobs)`.
    ///
    /// The latest date is 2017-08-23, so the window starts on 2016-08-23 and
    /// the first row falls outside it.
    pub const SAMPLE_MEASUREMENTS: &[(&str, &str, Option<f64>, Option<f64>)] = &[
        ("USC00519397", "2016-08-22", Some(0.5), Some(70.0)),
        ("USC00519397", "2016-08-23", Some(0.1), Some(72.0)),
        ("USC00519281", "2017-01-15", None, Some(68.0)),
        ("USC00519397", "2017-08-22", Some(0.0), Some(80.0)),
        ("USC00519397", "2017-08-23", Some(0.02), Some(81.0)),
        ("USC00519281", "2017-08-23", Some(0.05), Some(79.0)),
    ];

    /// Stations seeded by [`setup_test_app_state`]: `(station, name)`.
    pub const SAMPLE_STATIONS: &[(&str, &str)] = &[
        ("USC00519397", "WAIKIKI 717.2, HI US"),
        ("USC00519281", "WAIHEE 837.5, HI US"),
        ("USC00513117", "KANEOHE 838.1, HI US"),
    ];

    /// Create the measurement and station tables on an open connection
    pub async fn create_tables(db: &DatabaseConnection) {
        let schema = Schema::new(DbBackend::Sqlite);
        let backend = db.get_database_backend();
        db.execute(backend.build(&schema.create_table_from_entity(Measurement)))
            .await
            .expect("Failed to create measurement table");
        db.execute(backend.build(&schema.create_table_from_entity(Station)))
            .await
            .expect("Failed to create station table");
    }

    /// Create an in-memory SQLite database with empty tables
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");
        create_tables(&db).await;
        db
    }

    /// Insert the sample measurements and stations
    pub async fn seed_sample_data(db: &DatabaseConnection) {
        for (station, date, prcp, tobs) in SAMPLE_MEASUREMENTS {
            measurement::ActiveModel {
                station: Set(station.to_string()),
                date: Set(date.to_string()),
                prcp: Set(*prcp),
                tobs: Set(*tobs),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to insert measurement");
        }

        for (code, name) in SAMPLE_STATIONS {
            station::ActiveModel {
                station: Set(code.to_string()),
                name: Set(name.to_string()),
                latitude: Set(Some(21.3)),
                longitude: Set(Some(-157.8)),
                elevation: Set(Some(10.0)),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to insert station");
        }
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        seed_sample_data(&db).await;

        let dataset = ClimateDataset::load(&db)
            .await
            .expect("Failed to load sample dataset");

        AppState::new(db, dataset)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let state = setup_test_app_state().await;
        create_router(state)
    }
}
