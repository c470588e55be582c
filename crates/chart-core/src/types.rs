// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants (viewport sizes, paddings, legend metrics).

/// Default viewport width in pixels.
pub const WIDTH: u32 = 640;
/// Default parent height in pixels; used when a chart fills its parent.
pub const PARENT_HEIGHT: u32 = 400;

/// Width reserved for the vertical legend block.
pub const LEGEND_WIDTH: f32 = 120.0;
/// Row height of one legend entry.
pub const LEGEND_ROW: f32 = 20.0;
/// Side of the legend color swatch.
pub const LEGEND_SWATCH: f32 = 10.0;

pub const LABEL_SIZE: f32 = 11.0;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 16, 16, 32)
    }
}

/// Drawing area handed to the layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    /// Height of the parent; only consulted when the chart fills it.
    pub parent_height: u32,
    pub insets: Insets,
}

impl Viewport {
    pub fn new(width: u32, parent_height: u32) -> Self {
        Self { width, parent_height, insets: Insets::default() }
    }
}

impl Default for Viewport {
    fn default() -> Self { Self::new(WIDTH, PARENT_HEIGHT) }
}
