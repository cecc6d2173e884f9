use model::entities::{measurement, prelude::*, station};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema, Set,
};

/// Creates an in-memory database holding empty `measurement` and `station` tables.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    let schema = Schema::new(DbBackend::Sqlite);
    let backend = db.get_database_backend();
    db.execute(backend.build(&schema.create_table_from_entity(Measurement)))
        .await
        .expect("Failed to create measurement table");
    db.execute(backend.build(&schema.create_table_from_entity(Station)))
        .await
        .expect("Failed to create station table");

    db
}

pub async fn insert_measurement(
    db: &DatabaseConnection,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: Option<f64>,
) -> measurement::Model {
    measurement::ActiveModel {
        station: Set(station.to_string()),
        date: Set(date.to_string()),
        prcp: Set(prcp),
        tobs: Set(tobs),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert measurement")
}

pub async fn insert_station(db: &DatabaseConnection, station: &str, name: &str) -> station::Model {
    station::ActiveModel {
        station: Set(station.to_string()),
        name: Set(name.to_string()),
        latitude: Set(None),
        longitude: Set(None),
        elevation: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert station")
}
