// File: crates/chart-core/src/scene.rs
// Summary: Pixel-space drawing primitives produced by layout and consumed by the SVG/raster backends.

use crate::color::Color;
use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier: two control points, then the end point.
    CubicTo(Point, Point, Point),
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect {
        rect: Rect,
        fill: Color,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Color,
        width: f32,
    },
    Path {
        cmds: Vec<PathCmd>,
        stroke: Option<Color>,
        fill: Option<Color>,
        fill_opacity: f32,
        stroke_width: f32,
    },
    /// Annular sector; angles in radians, clockwise from 12 o'clock.
    Wedge {
        center: Point,
        inner_radius: f32,
        outer_radius: f32,
        start_angle: f32,
        end_angle: f32,
        fill: Color,
    },
    Text {
        at: Point,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    },
}

/// A laid-out chart: fixed pixel size, background, primitives in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub items: Vec<Primitive>,
}

impl Scene {
    pub fn wedges(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter().filter(|p| matches!(p, Primitive::Wedge { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter().filter(|p| matches!(p, Primitive::Rect { .. }))
    }

    pub fn paths(&self) -> impl Iterator<Item = &Primitive> {
        self.items.iter().filter(|p| matches!(p, Primitive::Path { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
