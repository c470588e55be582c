// File: crates/chart-core/src/table.rs
// Summary: Reshapes column-oriented series into one row record per category.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::spec::{ChartSpec, SeriesSpec};

/// Key of the category label in every row.
pub const CATEGORY_KEY: &str = "name";

/// Key under which `series` appears in row records: its display name, or
/// `dataset{index}` when unnamed.
pub fn resolve_series_name(series: &SeriesSpec, index: usize) -> String {
    match series.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("dataset{index}"),
    }
}

/// One category with the value of every series at that position.
/// Serializes as a flat map: `{"name": "Jan", "dataset0": 10}`; absent values
/// are left out, and a series keyed `name` never shadows the category label.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub name: String,
    pub values: Vec<(String, Option<f64>)>,
}

impl Row {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), values: Vec::new() }
    }

    /// Set `key`. A repeated key keeps its first position and takes the newer value.
    pub fn insert(&mut self, key: String, value: Option<f64>) {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.values.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.iter().find(|(k, _)| k == key).and_then(|(_, v)| *v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present: Vec<(&str, f64)> = self
            .values
            .iter()
            .filter(|(k, _)| k != CATEGORY_KEY)
            .filter_map(|(k, v)| v.map(|v| (k.as_str(), v)))
            .collect();
        let mut map = serializer.serialize_map(Some(present.len() + 1))?;
        map.serialize_entry(CATEGORY_KEY, &self.name)?;
        for (key, value) in present {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

/// Build the row table: one row per category, in category order.
pub fn build_rows(spec: &ChartSpec) -> Vec<Row> {
    spec.categories
        .iter()
        .enumerate()
        .map(|(row_index, label)| {
            let mut row = Row::new(label.clone());
            for (series_index, series) in spec.series.iter().enumerate() {
                row.insert(resolve_series_name(series, series_index), series.value_at(row_index));
            }
            row
        })
        .collect()
}
