// File: crates/chart-core/src/axis.rs
// Summary: Axis descriptions carried by cartesian render trees.

use serde::Serialize;

use crate::options::IndexAxis;
use crate::table::CATEGORY_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Bottom,
    Left,
}

/// What an axis measures: the row categories (read from `data_key`) or the values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AxisScale {
    Category { data_key: String },
    Number,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub position: AxisPosition,
    pub scale: AxisScale,
}

impl Axis {
    pub fn category(position: AxisPosition) -> Self {
        Self { position, scale: AxisScale::Category { data_key: CATEGORY_KEY.to_string() } }
    }

    pub fn number(position: AxisPosition) -> Self {
        Self { position, scale: AxisScale::Number }
    }

    pub fn is_category(&self) -> bool { matches!(self.scale, AxisScale::Category { .. }) }
}

/// Category and value axes for the given orientation, in that order.
pub fn axes_for(index_axis: IndexAxis) -> (Axis, Axis) {
    match index_axis {
        IndexAxis::X => (Axis::category(AxisPosition::Bottom), Axis::number(AxisPosition::Left)),
        IndexAxis::Y => (Axis::category(AxisPosition::Left), Axis::number(AxisPosition::Bottom)),
    }
}
