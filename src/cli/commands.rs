pub mod export_charts;
pub mod serve;

pub use export_charts::export_charts;
pub use serve::serve;
