use common::StationDto;
use model::entities::station;
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect, TransactionTrait};
use tracing::{debug, instrument};

use crate::error::Result;

/// Lists every station as `(station, name)` in query-result order.
///
/// The query runs inside its own transaction, which holds one pooled
/// connection for the duration of the call. It is committed on success; on
/// any error the transaction is dropped, which rolls it back and hands the
/// connection back to the pool.
#[instrument(skip(db))]
pub async fn list_stations(db: &DatabaseConnection) -> Result<Vec<StationDto>> {
    let txn = db.begin().await?;

    let rows: Vec<(String, String)> = station::Entity::find()
        .select_only()
        .column(station::Column::Station)
        .column(station::Column::Name)
        .into_tuple()
        .all(&txn)
        .await?;

    txn.commit().await?;
    debug!("Fetched {} stations", rows.len());

    Ok(rows
        .into_iter()
        .map(|(station, name)| StationDto { station, name })
        .collect())
}
