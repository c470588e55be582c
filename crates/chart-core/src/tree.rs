// File: crates/chart-core/src/tree.rs
// Summary: Render tree produced by the adapter; a declarative description a host renderer draws.

use serde::Serialize;

use crate::axis::Axis;
use crate::color::Color;
use crate::options::LegendAlign;
use crate::table::Row;

/// Outer radius of pie/doughnut wedges, as a fraction of the largest radius that fits.
pub const PIE_OUTER_RADIUS: f32 = 0.8;
/// Inner radius of doughnut wedges, same unit as [`PIE_OUTER_RADIUS`].
pub const DOUGHNUT_INNER_RADIUS: f32 = 0.6;

pub const UNSUPPORTED_MESSAGE: &str = "Unsupported chart type";

/// Container height. Width always spans the parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum Height {
    /// 100% of the parent height.
    Fill,
    /// Fixed height in units (pixels for the bundled renderers).
    Fixed(u32),
}

impl Height {
    /// Pixel height for a parent of `parent_height` pixels.
    pub fn resolve(&self, parent_height: u32) -> u32 {
        match *self {
            Height::Fill => parent_height,
            Height::Fixed(h) => h,
        }
    }

    /// CSS length, as a web host would set it.
    pub fn css(&self) -> String {
        match *self {
            Height::Fill => "100%".to_string(),
            Height::Fixed(h) => format!("{h}px"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Container {
    pub height: Height,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendLayout {
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub layout: LegendLayout,
    pub align: LegendAlign,
}

impl Legend {
    pub fn vertical(align: LegendAlign) -> Self {
        Self { layout: LegendLayout::Vertical, align }
    }
}

/// Direction bars grow in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    Monotone,
}

/// One visual encoding of one series, keyed into the row table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mark", rename_all = "lowercase")]
pub enum Mark {
    Bar { data_key: String, fill: Color },
    Line { data_key: String, stroke: Color, curve: Curve },
    Area { data_key: String, stroke: Color, fill: Color, curve: Curve },
}

impl Mark {
    pub fn data_key(&self) -> &str {
        match self {
            Mark::Bar { data_key, .. } | Mark::Line { data_key, .. } | Mark::Area { data_key, .. } => data_key,
        }
    }

    /// Legend swatch color.
    pub fn color(&self) -> &Color {
        match self {
            Mark::Bar { fill, .. } => fill,
            Mark::Line { stroke, .. } | Mark::Area { stroke, .. } => stroke,
        }
    }
}

/// Bar, line and area charts: a row table plotted on a category/value axis pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartesianChart {
    pub orientation: Orientation,
    pub container: Container,
    pub rows: Vec<Row>,
    pub category_axis: Axis,
    pub value_axis: Axis,
    pub marks: Vec<Mark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub grid: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Wedge {
    pub name: String,
    /// Absent when the first series is shorter than the categories.
    pub value: Option<f64>,
    pub fill: Color,
}

/// Pie and doughnut charts. A pie has an inner radius of zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChart {
    pub container: Container,
    /// Row key of the plotted series; `None` when the spec has no series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_key: Option<String>,
    pub wedges: Vec<Wedge>,
    pub inner_radius: f32,
    pub outer_radius: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub message: String,
    pub container: Container,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderTree {
    Cartesian(CartesianChart),
    Pie(PieChart),
    Unsupported(Placeholder),
}

impl RenderTree {
    pub fn container(&self) -> Container {
        match self {
            RenderTree::Cartesian(c) => c.container,
            RenderTree::Pie(p) => p.container,
            RenderTree::Unsupported(p) => p.container,
        }
    }

    pub fn as_cartesian(&self) -> Option<&CartesianChart> {
        match self {
            RenderTree::Cartesian(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            RenderTree::Pie(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_unsupported(&self) -> bool { matches!(self, RenderTree::Unsupported(_)) }

    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
