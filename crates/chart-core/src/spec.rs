// File: crates/chart-core/src/spec.rs
// Summary: Declarative chart description (kind, categories, series, options) and its JSON surface.
// Notes:
// - JSON is camelCase and also accepts chart.js-style names (`type`, `labels`,
//   `datasets`, `label`, `data`, `backgroundColor`) so existing view code can
//   hand over its config unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::options::ChartOptions;

/// Rendering strategy. Unknown names are kept so the adapter can answer
/// with a placeholder instead of rejecting the whole spec.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
    Doughnut,
    Unsupported(String),
}

impl ChartKind {
    pub fn as_str(&self) -> &str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Unsupported(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool { !matches!(self, ChartKind::Unsupported(_)) }
}

impl From<&str> for ChartKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            "area" => ChartKind::Area,
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            _ => ChartKind::Unsupported(value.to_string()),
        }
    }
}

impl From<String> for ChartKind {
    fn from(value: String) -> Self { ChartKind::from(value.as_str()) }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self { kind.as_str().to_string() }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Color configuration of a series: one color, or one per point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesColor {
    Single(Color),
    PerPoint(Vec<Color>),
}

/// One named sequence of values plotted against the shared categories.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    #[serde(default, alias = "label", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `null` entries (chart.js gaps) decode as NaN.
    #[serde(default, alias = "data", deserialize_with = "values_with_gaps")]
    pub values: Vec<f64>,
    #[serde(default, alias = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub color: Option<SeriesColor>,
}

impl SeriesSpec {
    pub fn new(values: Vec<f64>) -> Self {
        Self { name: None, values, color: None }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(SeriesColor::Single(color.into()));
        self
    }

    pub fn with_point_colors<C: Into<Color>>(mut self, colors: impl IntoIterator<Item = C>) -> Self {
        self.color = Some(SeriesColor::PerPoint(colors.into_iter().map(Into::into).collect()));
        self
    }

    /// Value at `index`, absent when the series is shorter than the categories.
    pub fn value_at(&self, index: usize) -> Option<f64> { self.values.get(index).copied() }
}

fn values_with_gaps<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error> {
    let raw: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Library-agnostic chart description. Built fresh by the caller for each
/// render; the adapter only reads it.
///
/// Every series is expected to carry one value per category. This is not
/// checked: missing positions turn into absent values downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(alias = "type")]
    pub kind: ChartKind,
    #[serde(default, alias = "labels")]
    pub categories: Vec<String>,
    #[serde(default, alias = "datasets")]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn new<S: Into<String>>(kind: impl Into<ChartKind>, categories: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind: kind.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
            options: ChartOptions::default(),
        }
    }

    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Decode a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
