//! Columnar view of the observations.
//!
//! Rows loaded from the store are laid out as a polars [`DataFrame`] with one
//! column per field. The `date` column has the polars `Date` dtype so range
//! filters and aggregations run on it directly.

use chrono::NaiveDate;
use polars::prelude::*;

use crate::error::{ComputeError, Result};
use crate::observation::Observation;

pub const STATION_COLUMN: &str = "station";
pub const DATE_COLUMN: &str = "date";
pub const PRECIPITATION_COLUMN: &str = "prcp";
pub const TEMPERATURE_COLUMN: &str = "tobs";

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Builds a frame with one row per observation, keeping their order.
pub fn observations_frame(observations: &[Observation]) -> Result<DataFrame> {
    let stations: Vec<&str> = observations
        .iter()
        .map(|observation| observation.station_id.as_str())
        .collect();
    let dates: Vec<NaiveDate> = observations.iter().map(|observation| observation.date).collect();
    let precipitation: Vec<Option<f64>> = observations
        .iter()
        .map(|observation| observation.precipitation)
        .collect();
    let temperature: Vec<Option<f64>> = observations
        .iter()
        .map(|observation| observation.temperature)
        .collect();

    let df = DataFrame::new(vec![
        Series::new(STATION_COLUMN.into(), stations).into(),
        Series::new(DATE_COLUMN.into(), dates).into(),
        Series::new(PRECIPITATION_COLUMN.into(), precipitation).into(),
        Series::new(TEMPERATURE_COLUMN.into(), temperature).into(),
    ])?;

    Ok(df)
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Reads the `date` column back as calendar dates.
pub fn date_values(df: &DataFrame) -> Result<Vec<NaiveDate>> {
    let physical = df
        .column(DATE_COLUMN)?
        .as_materialized_series()
        .to_physical_repr();

    physical
        .i32()?
        .into_iter()
        .map(|days| {
            days.and_then(date_from_epoch_days).ok_or_else(|| {
                ComputeError::DataFrame(format!("missing or out of range value in {DATE_COLUMN}"))
            })
        })
        .collect()
}

/// Reads a float column, keeping nulls as `None`.
pub fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let values = df
        .column(name)?
        .as_materialized_series()
        .f64()?
        .into_iter()
        .collect();
    Ok(values)
}

/// Reads every row back as an [`Observation`].
pub fn frame_observations(df: &DataFrame) -> Result<Vec<Observation>> {
    let stations: Vec<String> = df
        .column(STATION_COLUMN)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|station| {
            station.map(str::to_owned).ok_or_else(|| {
                ComputeError::DataFrame(format!("missing value in {STATION_COLUMN}"))
            })
        })
        .collect::<Result<_>>()?;
    let dates = date_values(df)?;
    let precipitation = float_values(df, PRECIPITATION_COLUMN)?;
    let temperature = float_values(df, TEMPERATURE_COLUMN)?;

    Ok(stations
        .into_iter()
        .zip(dates)
        .zip(precipitation.into_iter().zip(temperature))
        .map(|((station_id, date), (precipitation, temperature))| {
            Observation::new(station_id, date, precipitation, temperature)
        })
        .collect())
}
