use polars::prelude::DataFrame;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use crate::error::Result;
use crate::frame::{frame_observations, observations_frame};
use crate::observation::{Observation, load_observations};
use crate::window::LastTwelveMonths;

/// Everything the server reads from the measurement table, loaded once.
///
/// Nothing here changes after construction; the value is shared read-only
/// between request handlers.
#[derive(Debug, Clone)]
pub struct ClimateDataset {
    frame: DataFrame,
    window: LastTwelveMonths,
}

impl ClimateDataset {
    /// Builds the dataset from observations already in memory.
    pub fn from_observations(observations: &[Observation]) -> Result<Self> {
        let frame = observations_frame(observations)?;
        let window = LastTwelveMonths::from_frame(&frame)?;
        Ok(Self { frame, window })
    }

    /// Loads all measurements and derives the trailing twelve month window.
    ///
    /// Fails when the store cannot be read, when a date does not parse, or
    /// when the table is empty.
    #[instrument(skip(db))]
    pub async fn load(db: &DatabaseConnection) -> Result<Self> {
        let observations = load_observations(db).await?;
        let dataset = Self::from_observations(&observations)?;

        info!(
            "Loaded {} observations, {} in window {} to {}",
            dataset.len(),
            dataset.window.len(),
            dataset.window.start_date(),
            dataset.window.max_date()
        );

        Ok(dataset)
    }

    /// Every loaded row, in primary key order.
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

    pub fn window(&self) -> &LastTwelveMonths {
        &self.window
    }
}
