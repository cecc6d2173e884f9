pub mod chart;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod histogram;
pub mod observation;
pub mod stations;
pub mod window;

#[cfg(test)]
mod testing;

pub use chart::{ChartImage, render_precipitation_bar_chart, render_temperature_histogram};
pub use dataset::ClimateDataset;
pub use error::ComputeError;
pub use histogram::{HISTOGRAM_BINS, Histogram};
pub use observation::Observation;
pub use stations::list_stations;
pub use window::LastTwelveMonths;
