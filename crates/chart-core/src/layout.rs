// File: crates/chart-core/src/layout.rs
// Summary: Resolves a render tree into pixel-space primitives for a given viewport and theme.

use std::f32::consts::TAU;

use tracing::trace;

use crate::color::Color;
use crate::curve::monotone_x;
use crate::geometry::{Point, Rect};
use crate::grid::{format_tick, nice_ticks};
use crate::options::LegendAlign;
use crate::scale::{BandScale, ValueScale};
use crate::scene::{PathCmd, Primitive, Scene, TextAnchor};
use crate::theme::Theme;
use crate::tree::{CartesianChart, Legend, Mark, Orientation, PieChart, RenderTree};
use crate::types::{Insets, Viewport, LABEL_SIZE, LEGEND_ROW, LEGEND_SWATCH, LEGEND_WIDTH};

/// Fraction of each category step left empty around a bar group.
const BAND_PADDING: f32 = 0.2;
/// Pixels between bars of the same group.
const BAR_GAP: f32 = 4.0;
const AREA_OPACITY: f32 = 0.6;
const STROKE_WIDTH: f32 = 2.0;
const TICK_COUNT: usize = 5;

/// Lay out `tree` inside `viewport`. The output height follows the tree's
/// container: a fixed height, or the viewport's parent height when filling.
pub fn layout(tree: &RenderTree, viewport: &Viewport, theme: &Theme) -> Scene {
    let width = viewport.width;
    let height = tree.container().height.resolve(viewport.parent_height);
    trace!(width, height, "laying out chart");

    let frame = Rect::from_ltwh(0.0, 0.0, width as f32, height as f32);
    let mut items = Vec::new();
    match tree {
        RenderTree::Cartesian(chart) => layout_cartesian(chart, frame, &viewport.insets, theme, &mut items),
        RenderTree::Pie(chart) => layout_pie(chart, frame, theme, &mut items),
        RenderTree::Unsupported(placeholder) => items.push(Primitive::Text {
            at: frame.center(),
            text: placeholder.message.clone(),
            size: 14.0,
            color: theme.placeholder_text.clone(),
            anchor: TextAnchor::Middle,
        }),
    }
    Scene { width, height, background: theme.background.clone(), items }
}

/// Carve the legend strip off `frame`, returning (chart area, legend area).
fn split_legend(frame: Rect, legend: Option<&Legend>) -> (Rect, Option<Rect>) {
    match legend {
        None => (frame, None),
        Some(l) => match l.align {
            LegendAlign::Right => (
                Rect::from_ltrb(frame.left, frame.top, frame.right - LEGEND_WIDTH, frame.bottom),
                Some(Rect::from_ltrb(frame.right - LEGEND_WIDTH, frame.top, frame.right, frame.bottom)),
            ),
            LegendAlign::Left => (
                Rect::from_ltrb(frame.left + LEGEND_WIDTH, frame.top, frame.right, frame.bottom),
                Some(Rect::from_ltrb(frame.left, frame.top, frame.left + LEGEND_WIDTH, frame.bottom)),
            ),
        },
    }
}

/// Vertical legend list, centered in `area`.
fn draw_legend(area: Rect, entries: &[(String, Color)], theme: &Theme, items: &mut Vec<Primitive>) {
    let block = entries.len() as f32 * LEGEND_ROW;
    let mut y = area.center().y - block * 0.5;
    let x = area.left + 8.0;
    for (label, color) in entries {
        let swatch_top = y + (LEGEND_ROW - LEGEND_SWATCH) * 0.5;
        items.push(Primitive::Rect {
            rect: Rect::from_ltwh(x, swatch_top, LEGEND_SWATCH, LEGEND_SWATCH),
            fill: color.clone(),
        });
        items.push(Primitive::Text {
            at: Point::new(x + LEGEND_SWATCH + 6.0, swatch_top + LEGEND_SWATCH),
            text: label.clone(),
            size: LABEL_SIZE,
            color: theme.legend_text.clone(),
            anchor: TextAnchor::Start,
        });
        y += LEGEND_ROW;
    }
}

fn value_domain(chart: &CartesianChart) -> (f64, f64) {
    let mut lo = 0.0f64;
    let mut hi = 0.0f64;
    for row in &chart.rows {
        for mark in &chart.marks {
            if let Some(v) = row.get(mark.data_key()).filter(|v| v.is_finite()) {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    (lo, hi)
}

fn layout_cartesian(chart: &CartesianChart, frame: Rect, insets: &Insets, theme: &Theme, items: &mut Vec<Primitive>) {
    let (area, legend_area) = split_legend(frame, chart.legend.as_ref());
    let plot = Rect::from_ltrb(
        area.left + insets.left as f32,
        area.top + insets.top as f32,
        (area.right - insets.right as f32).max(area.left + insets.left as f32 + 1.0),
        (area.bottom - insets.bottom as f32).max(area.top + insets.top as f32 + 1.0),
    );

    let (lo, hi) = value_domain(chart);
    let ticks = nice_ticks(lo, hi, TICK_COUNT);
    let step = if ticks.len() > 1 { ticks[1] - ticks[0] } else { 1.0 };
    let (dmin, dmax) = (ticks[0], ticks[ticks.len() - 1]);

    let n = chart.rows.len();
    let vertical = chart.orientation == Orientation::Vertical;
    let (band, value) = if vertical {
        (
            BandScale::new(plot.left, plot.right, n, BAND_PADDING),
            ValueScale::new_linear(plot.bottom, plot.top, dmin, dmax),
        )
    } else {
        (
            BandScale::new(plot.top, plot.bottom, n, BAND_PADDING),
            ValueScale::new_linear(plot.left, plot.right, dmin, dmax),
        )
    };

    // Grid and value ticks
    for &t in &ticks {
        let px = value.to_px(t);
        let (from, to, label_at, anchor) = if vertical {
            (Point::new(plot.left, px), Point::new(plot.right, px), Point::new(plot.left - 6.0, px + 4.0), TextAnchor::End)
        } else {
            (Point::new(px, plot.top), Point::new(px, plot.bottom), Point::new(px, plot.bottom + 16.0), TextAnchor::Middle)
        };
        if chart.grid {
            items.push(Primitive::Line { from, to, stroke: theme.grid.clone(), width: 1.0 });
        }
        items.push(Primitive::Text {
            at: label_at,
            text: format_tick(t, step),
            size: LABEL_SIZE,
            color: theme.axis_label.clone(),
            anchor,
        });
    }

    // Axis lines
    let bottom_left = Point::new(plot.left, plot.bottom);
    items.push(Primitive::Line { from: bottom_left, to: Point::new(plot.right, plot.bottom), stroke: theme.axis_line.clone(), width: 1.0 });
    items.push(Primitive::Line { from: Point::new(plot.left, plot.top), to: bottom_left, stroke: theme.axis_line.clone(), width: 1.0 });

    // Category labels
    for (i, row) in chart.rows.iter().enumerate() {
        let c = band.center(i);
        let (at, anchor) = if vertical {
            (Point::new(c, plot.bottom + 16.0), TextAnchor::Middle)
        } else {
            (Point::new(plot.left - 6.0, c + 4.0), TextAnchor::End)
        };
        items.push(Primitive::Text { at, text: row.name.clone(), size: LABEL_SIZE, color: theme.axis_label.clone(), anchor });
    }

    // Marks
    let bar_count = chart.marks.iter().filter(|m| matches!(m, Mark::Bar { .. })).count();
    let group = band.bandwidth();
    let gap = BAR_GAP.min(group * 0.1);
    let bar_width = if bar_count > 0 {
        ((group - gap * (bar_count as f32 - 1.0)) / bar_count as f32).max(1.0)
    } else {
        0.0
    };
    let base = value.baseline_px();
    let mut bar_slot = 0usize;

    for mark in &chart.marks {
        let key = mark.data_key();
        match mark {
            Mark::Bar { fill, .. } => {
                for (i, row) in chart.rows.iter().enumerate() {
                    let Some(v) = row.get(key).filter(|v| v.is_finite()) else { continue };
                    let offset = band.band_start(i) + bar_slot as f32 * (bar_width + gap);
                    let tip = value.to_px(v);
                    let rect = if vertical {
                        Rect::from_ltrb(offset, tip, offset + bar_width, base)
                    } else {
                        Rect::from_ltrb(base, offset, tip, offset + bar_width)
                    };
                    items.push(Primitive::Rect { rect: rect.sorted(), fill: fill.clone() });
                }
                bar_slot += 1;
            }
            Mark::Line { stroke, .. } => {
                for run in point_runs(chart, key, &band, &value) {
                    items.push(Primitive::Path {
                        cmds: monotone_x(&run),
                        stroke: Some(stroke.clone()),
                        fill: None,
                        fill_opacity: 1.0,
                        stroke_width: STROKE_WIDTH,
                    });
                }
            }
            Mark::Area { stroke, fill, .. } => {
                for run in point_runs(chart, key, &band, &value) {
                    let outline = monotone_x(&run);
                    let mut body = outline.clone();
                    if let (Some(first), Some(last)) = (run.first(), run.last()) {
                        body.push(PathCmd::LineTo(Point::new(last.x, base)));
                        body.push(PathCmd::LineTo(Point::new(first.x, base)));
                        body.push(PathCmd::Close);
                    }
                    items.push(Primitive::Path {
                        cmds: body,
                        stroke: None,
                        fill: Some(fill.clone()),
                        fill_opacity: AREA_OPACITY,
                        stroke_width: 0.0,
                    });
                    items.push(Primitive::Path {
                        cmds: outline,
                        stroke: Some(stroke.clone()),
                        fill: None,
                        fill_opacity: 1.0,
                        stroke_width: STROKE_WIDTH,
                    });
                }
            }
        }
    }

    if let Some(area) = legend_area {
        let entries: Vec<(String, Color)> =
            chart.marks.iter().map(|m| (m.data_key().to_string(), m.color().clone())).collect();
        draw_legend(area, &entries, theme, items);
    }
}

/// Contiguous runs of present, finite values for `key`, as pixel points.
/// Anything else breaks the line.
fn point_runs(chart: &CartesianChart, key: &str, band: &BandScale, value: &ValueScale) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (i, row) in chart.rows.iter().enumerate() {
        match row.get(key).filter(|v| v.is_finite()) {
            Some(v) => current.push(Point::new(band.center(i), value.to_px(v))),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn layout_pie(chart: &PieChart, frame: Rect, theme: &Theme, items: &mut Vec<Primitive>) {
    let (area, legend_area) = split_legend(frame, chart.legend.as_ref());
    let center = area.center();
    let max_radius = area.width().min(area.height()).max(0.0) * 0.5;
    let outer_radius = max_radius * chart.outer_radius;
    let inner_radius = max_radius * chart.inner_radius;

    // Absent and negative values take no angle.
    let weights: Vec<f64> = chart.wedges.iter().map(|w| w.value.unwrap_or(0.0).max(0.0)).collect();
    let total: f64 = weights.iter().sum();

    let mut angle = 0.0f32;
    for (wedge, weight) in chart.wedges.iter().zip(&weights) {
        let sweep = if total > 0.0 { (weight / total) as f32 * TAU } else { 0.0 };
        items.push(Primitive::Wedge {
            center,
            inner_radius,
            outer_radius,
            start_angle: angle,
            end_angle: angle + sweep,
            fill: wedge.fill.clone(),
        });
        angle += sweep;
    }

    if let Some(area) = legend_area {
        let entries: Vec<(String, Color)> = chart.wedges.iter().map(|w| (w.name.clone(), w.fill.clone())).collect();
        draw_legend(area, &entries, theme, items);
    }
}
