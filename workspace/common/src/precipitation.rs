use chrono::NaiveDate;
use indexmap::IndexMap;
use indexmap::map::Iter;
use serde::ser::{Serialize, SerializeMap, Serializer};
use utoipa::ToSchema;

/// Precipitation keyed by calendar date.
///
/// Keeps the order in which dates were first seen. Inserting a date that is
/// already present replaces its value in place, so the last reading for a
/// date wins. Serializes as a JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
#[schema(value_type = Object)]
pub struct PrecipitationByDate(IndexMap<NaiveDate, Option<f64>>);

impl PrecipitationByDate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, precipitation: Option<f64>) {
        self.0.insert(date, precipitation);
    }

    pub fn get(&self, date: &NaiveDate) -> Option<Option<f64>> {
        self.0.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, NaiveDate, Option<f64>> {
        self.0.iter()
    }
}

impl FromIterator<(NaiveDate, Option<f64>)> for PrecipitationByDate {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Map key rendered as `YYYY-MM-DD`, independent of chrono's serde format.
struct DateKey<'a>(&'a NaiveDate);

impl Serialize for DateKey<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for PrecipitationByDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (date, precipitation) in &self.0 {
            map.serialize_entry(&DateKey(date), precipitation)?;
        }
        map.end()
    }
}
