use chrono::{Duration, NaiveDate};
use common::PrecipitationByDate;
use polars::prelude::{DataFrame, IntoLazy, col, lit};

use crate::error::{ComputeError, Result};
use crate::frame::{
    DATE_COLUMN, PRECIPITATION_COLUMN, TEMPERATURE_COLUMN, date_values, float_values,
    frame_observations, observations_frame,
};
use crate::observation::Observation;

/// Length of the trailing window, counted back from the latest observation.
pub const WINDOW_DAYS: i64 = 365;

/// Observations dated within `[max_date - 365 days, max_date]`.
///
/// Bounds are always taken from the full frame handed to
/// [`LastTwelveMonths::from_frame`], never from a filtered subset. The rows
/// inside the window are held as their own collected frame.
#[derive(Debug, Clone)]
pub struct LastTwelveMonths {
    start_date: NaiveDate,
    max_date: NaiveDate,
    frame: DataFrame,
}

impl LastTwelveMonths {
    pub fn from_frame(observations: &DataFrame) -> Result<Self> {
        if observations.height() == 0 {
            return Err(ComputeError::EmptyDataset);
        }

        let latest = observations
            .clone()
            .lazy()
            .select([col(DATE_COLUMN).max()])
            .collect()?;
        let max_date = date_values(&latest)?
            .into_iter()
            .next()
            .ok_or(ComputeError::EmptyDataset)?;
        let start_date = max_date
            .checked_sub_signed(Duration::days(WINDOW_DAYS))
            .ok_or(ComputeError::DateOutOfRange(max_date))?;

        let frame = observations
            .clone()
            .lazy()
            .filter(
                col(DATE_COLUMN)
                    .gt_eq(lit(start_date))
                    .and(col(DATE_COLUMN).lt_eq(lit(max_date))),
            )
            .collect()?;

        Ok(Self {
            start_date,
            max_date,
            frame,
        })
    }

    pub fn from_observations(observations: &[Observation]) -> Result<Self> {
        Self::from_frame(&observations_frame(observations)?)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// Rows inside the window, in their original order.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn observations(&self) -> Result<Vec<Observation>> {
        frame_observations(&self.frame)
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Non-null temperatures in window order.
    pub fn temperatures(&self) -> Result<Vec<f64>> {
        Ok(float_values(&self.frame, TEMPERATURE_COLUMN)?
            .into_iter()
            .flatten()
            .collect())
    }

    /// `(date, precipitation)` per row in window order, duplicates included.
    pub fn precipitation_points(&self) -> Result<Vec<(NaiveDate, Option<f64>)>> {
        let dates = date_values(&self.frame)?;
        let precipitation = float_values(&self.frame, PRECIPITATION_COLUMN)?;
        Ok(dates.into_iter().zip(precipitation).collect())
    }

    /// One entry per distinct date; a later row for the same date overwrites
    /// the earlier value.
    pub fn precipitation_by_date(&self) -> Result<PrecipitationByDate> {
        Ok(self.precipitation_points()?.into_iter().collect())
    }
}
