// File: crates/chart-core/src/curve.rs
// Summary: Monotone-in-x cubic interpolation for line and area marks.
// Notes:
// - Tangents follow Steffen's method: the curve never overshoots the data
//   between two consecutive points, and flat runs stay flat.

use crate::geometry::Point;
use crate::scene::PathCmd;

#[inline]
fn sign(v: f32) -> f32 { if v < 0.0 { -1.0 } else { 1.0 } }

#[inline]
fn secant(p0: Point, p1: Point) -> f32 {
    let h = p1.x - p0.x;
    if h.abs() < f32::EPSILON { 0.0 } else { (p1.y - p0.y) / h }
}

/// Tangent at an interior point from its two neighbors.
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f32 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = secant(p0, p1);
    let s1 = secant(p1, p2);
    let p = if (h0 + h1).abs() < f32::EPSILON { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// Tangent at an end point from the adjacent segment and its neighbor's tangent.
fn end_tangent(p0: Point, p1: Point, neighbor: f32) -> f32 {
    let h = p1.x - p0.x;
    if h.abs() < f32::EPSILON { neighbor } else { (3.0 * (p1.y - p0.y) / h - neighbor) / 2.0 }
}

/// Tangent (dy/dx) at every point. Two points share their secant.
pub fn monotone_tangents(points: &[Point]) -> Vec<f32> {
    let n = points.len();
    match points {
        [] | [_] => return vec![0.0; n],
        [a, b] => return vec![secant(*a, *b); 2],
        _ => {}
    }
    let mut t = vec![0.0f32; n];
    for i in 1..n - 1 {
        t[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    t[0] = end_tangent(points[0], points[1], t[1]);
    t[n - 1] = end_tangent(points[n - 2], points[n - 1], t[n - 2]);
    t
}

/// Path through `points` (sorted by x). Fewer than three points degrade to
/// a move (one point) or a straight segment (two points).
pub fn monotone_x(points: &[Point]) -> Vec<PathCmd> {
    match points {
        [] => Vec::new(),
        [p] => vec![PathCmd::MoveTo(*p)],
        [a, b] => vec![PathCmd::MoveTo(*a), PathCmd::LineTo(*b)],
        _ => {
            let t = monotone_tangents(points);
            let mut cmds = Vec::with_capacity(points.len());
            cmds.push(PathCmd::MoveTo(points[0]));
            for i in 0..points.len() - 1 {
                let (p0, p1) = (points[i], points[i + 1]);
                let dx = (p1.x - p0.x) / 3.0;
                cmds.push(PathCmd::CubicTo(
                    Point::new(p0.x + dx, p0.y + dx * t[i]),
                    Point::new(p1.x - dx, p1.y - dx * t[i + 1]),
                    p1,
                ));
            }
            cmds
        }
    }
}
