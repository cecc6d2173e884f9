use sea_orm::entity::prelude::*;

/// One daily reading taken at a weather station.
/// Dates are stored as text in the source database and are parsed
/// into calendar dates when the observations are loaded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "measurement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Station identifier, e.g. `USC00519281`.
    pub station: String,
    pub date: String,
    /// Precipitation in inches.
    pub prcp: Option<f64>,
    /// Observed temperature in degrees Fahrenheit.
    pub tobs: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
