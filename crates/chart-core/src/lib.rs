// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; chart spec model, adapter to render trees, layout and SVG output.

pub mod adapter;
pub mod axis;
pub mod category;
pub mod color;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod options;
pub mod scale;
pub mod scene;
pub mod spec;
pub mod svg;
pub mod table;
pub mod theme;
pub mod tree;
pub mod types;

pub use adapter::adapt;
pub use color::{resolve_color, resolve_series_color, Color, DEFAULT_PALETTE, DEFAULT_TONE};
pub use error::{ChartError, Result};
pub use layout::layout;
pub use options::{ChartOptions, IndexAxis, LegendAlign, ResolvedOptions};
pub use scene::{Primitive, Scene};
pub use spec::{ChartKind, ChartSpec, SeriesColor, SeriesSpec};
pub use svg::{to_svg, write_svg};
pub use table::{build_rows, resolve_series_name, Row};
pub use theme::Theme;
pub use tree::{Height, RenderTree};
pub use types::Viewport;

/// Adapt, lay out and serialize in one step.
pub fn render_svg(spec: &ChartSpec, viewport: &Viewport, theme: &Theme) -> String {
    to_svg(&layout(&adapt(spec), viewport, theme))
}
