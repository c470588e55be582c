// File: crates/chart-core/src/options.rs
// Summary: Rendering options as handed over by the caller, and their resolution to concrete settings.

use serde::{Deserialize, Serialize};

use crate::tree::Height;

/// Fixed container height used while the aspect ratio is maintained.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Which axis carries the categories.
/// `X` is the usual category-major layout (vertical bars); `Y` puts the
/// categories on the vertical axis (horizontal bars).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    #[default]
    X,
    Y,
}

/// Horizontal placement of the (vertical) legend list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendAlign {
    Left,
    #[default]
    Right,
}

/// Caller-facing options. Every field is optional; see [`ChartOptions::resolve`]
/// for the defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Category axis. Default: `x`.
    #[serde(default, alias = "indexAxis", skip_serializing_if = "Option::is_none")]
    pub axis_orientation: Option<IndexAxis>,
    /// `Some(false)` makes the container fill its parent's height.
    /// Default: `true` (fixed height).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    /// Default: right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_align: Option<LegendAlign>,
    /// Default: `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    /// Default: `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
}

impl ChartOptions {
    pub fn horizontal(mut self) -> Self {
        self.axis_orientation = Some(IndexAxis::Y);
        self
    }

    pub fn fill_height(mut self) -> Self {
        self.maintain_aspect_ratio = Some(false);
        self
    }

    pub fn legend_left(mut self) -> Self {
        self.legend_align = Some(LegendAlign::Left);
        self
    }

    /// Apply defaults once, so downstream code never inspects `Option`s.
    pub fn resolve(&self) -> ResolvedOptions {
        let height = if self.maintain_aspect_ratio == Some(false) {
            Height::Fill
        } else {
            Height::Fixed(DEFAULT_HEIGHT)
        };
        ResolvedOptions {
            index_axis: self.axis_orientation.unwrap_or_default(),
            height,
            legend_align: self.legend_align.unwrap_or_default(),
            show_legend: self.show_legend.unwrap_or(true),
            show_grid: self.show_grid.unwrap_or(true),
        }
    }
}

/// Options with every default applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub index_axis: IndexAxis,
    pub height: Height,
    pub legend_align: LegendAlign,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self { ChartOptions::default().resolve() }
}
