use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The measurement table holds no rows, so no window can be derived
    #[error("No observations found in the measurement table")]
    EmptyDataset,

    /// A measurement row carries a date that cannot be parsed
    #[error("Invalid date {value:?} in measurement row {id}")]
    InvalidDate { id: i32, value: String },

    /// The latest observation is too close to the calendar minimum to
    /// subtract the window length from it
    #[error("Date {0} leaves no room for a trailing window")]
    DateOutOfRange(chrono::NaiveDate),

    /// Error from polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error while drawing a chart
    #[error("Chart error: {0}")]
    Chart(String),

    /// Error while encoding a rendered chart
    #[error("Encode error: {0}")]
    Encode(String),
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        ComputeError::DataFrame(error.to_string())
    }
}

impl From<image::ImageError> for ComputeError {
    fn from(error: image::ImageError) -> Self {
        ComputeError::Encode(error.to_string())
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
