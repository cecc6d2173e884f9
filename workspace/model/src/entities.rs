//! SeaORM entities for the climate observation store.
//! The store is read-only for the application: one table of daily
//! measurements and one table describing the weather stations.

pub mod measurement;
pub mod station;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::measurement::Entity as Measurement;
    pub use super::station::Entity as Station;
}
