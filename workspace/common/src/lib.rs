//! Common transport-layer types served by the JSON API.
//! Both shapes are built from explicit field copies so nothing from the
//! storage layer leaks into a response.

mod precipitation;

pub use precipitation::PrecipitationByDate;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A weather station as listed by `/api/v1.0/stations`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StationDto {
    /// Station identifier, e.g. `USC00519281`
    pub station: String,
    /// Human readable station name
    pub name: String,
}

impl StationDto {
    pub fn new(station: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            name: name.into(),
        }
    }
}
