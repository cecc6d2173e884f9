use chrono::{NaiveDate, NaiveDateTime};
use model::entities::measurement;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// A single station reading with its date parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station_id: String,
    pub date: NaiveDate,
    pub precipitation: Option<f64>,
    pub temperature: Option<f64>,
}

impl Observation {
    pub fn new(
        station_id: impl Into<String>,
        date: NaiveDate,
        precipitation: Option<f64>,
        temperature: Option<f64>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            date,
            precipitation,
            temperature,
        }
    }
}

impl TryFrom<measurement::Model> for Observation {
    type Error = ComputeError;

    fn try_from(row: measurement::Model) -> Result<Self> {
        let date = parse_observation_date(&row.date).ok_or_else(|| ComputeError::InvalidDate {
            id: row.id,
            value: row.date.clone(),
        })?;

        Ok(Self {
            station_id: row.station,
            date,
            precipitation: row.prcp,
            temperature: row.tobs,
        })
    }
}

/// Parses the textual date column. Plain dates are the norm; timestamps are
/// accepted and truncated to their calendar day.
pub fn parse_observation_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|timestamp| timestamp.date())
    })
}

/// Reads every measurement row in primary key order.
///
/// The load is all-or-nothing: a single unparsable date fails the whole call.
#[instrument(skip(db))]
pub async fn load_observations(db: &DatabaseConnection) -> Result<Vec<Observation>> {
    let rows = measurement::Entity::find()
        .order_by_asc(measurement::Column::Id)
        .all(db)
        .await?;
    debug!("Fetched {} measurement rows", rows.len());

    rows.into_iter().map(Observation::try_from).collect()
}
