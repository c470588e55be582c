// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless raster backend; paints a laid-out Scene onto a Skia CPU surface and encodes PNG/RGBA.

use std::f32::consts::TAU;
use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::{debug, warn};

use dashchart_core::geometry::Point;
use dashchart_core::scene::{PathCmd, Primitive, Scene, TextAnchor};
use dashchart_core::{Color, DEFAULT_TONE};

pub struct RasterOptions {
    /// Skip text primitives (avoids font variance in pixel tests).
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self { Self { draw_text: true } }
}

/// Rasterize `scene` and encode it as PNG bytes.
pub fn render_to_png_bytes(scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = raster_surface(scene)?;
    draw_scene(surface.canvas(), scene, opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Rasterize `scene` to a PNG file, creating parent directories as needed.
pub fn render_to_png(scene: &Scene, opts: &RasterOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

/// Rasterize `scene` into a straight-alpha RGBA8 buffer.
/// Returns (pixels, width, height, row stride in bytes).
pub fn render_to_rgba8(scene: &Scene, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = raster_surface(scene)?;
    draw_scene(surface.canvas(), scene, opts);

    let (w, h) = (scene.width.max(1), scene.height.max(1));
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read pixels failed");
    }
    Ok((pixels, w, h, stride))
}

fn raster_surface(scene: &Scene) -> Result<skia::Surface> {
    let (w, h) = (scene.width.max(1) as i32, scene.height.max(1) as i32);
    skia::surfaces::raster_n32_premul((w, h)).ok_or_else(|| anyhow::anyhow!("failed to create raster surface {w}x{h}"))
}

// ---- painting ---------------------------------------------------------------

fn draw_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RasterOptions) {
    canvas.clear(sk_color(&scene.background));
    let font = skia::Font::default();

    for item in &scene.items {
        match item {
            Primitive::Rect { rect, fill } => {
                let paint = fill_paint(fill, 1.0);
                canvas.draw_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), &paint);
            }
            Primitive::Line { from, to, stroke, width } => {
                let paint = stroke_paint(stroke, *width);
                canvas.draw_line(sk_point(*from), sk_point(*to), &paint);
            }
            Primitive::Path { cmds, stroke, fill, fill_opacity, stroke_width } => {
                let path = build_path(cmds);
                if let Some(fill) = fill {
                    canvas.draw_path(&path, &fill_paint(fill, *fill_opacity));
                }
                if let Some(stroke) = stroke {
                    canvas.draw_path(&path, &stroke_paint(stroke, *stroke_width));
                }
            }
            Primitive::Wedge { center, inner_radius, outer_radius, start_angle, end_angle, fill } => {
                if let Some(path) = wedge_path(*center, *inner_radius, *outer_radius, *start_angle, *end_angle) {
                    canvas.draw_path(&path, &fill_paint(fill, 1.0));
                }
            }
            Primitive::Text { at, text, size, color, anchor } => {
                if !opts.draw_text {
                    continue;
                }
                let paint = fill_paint(color, 1.0);
                let mut font = font.clone();
                font.set_size(*size);
                let (advance, _) = font.measure_str(text, Some(&paint));
                let x = match anchor {
                    TextAnchor::Start => at.x,
                    TextAnchor::Middle => at.x - advance * 0.5,
                    TextAnchor::End => at.x - advance,
                };
                canvas.draw_str(text, (x, at.y), &font, &paint);
            }
        }
    }
}

fn build_path(cmds: &[PathCmd]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => { path.move_to(sk_point(p)); }
            PathCmd::LineTo(p) => { path.line_to(sk_point(p)); }
            PathCmd::CubicTo(c1, c2, p) => { path.cubic_to(sk_point(c1), sk_point(c2), sk_point(p)); }
            PathCmd::Close => { path.close(); }
        }
    }
    path
}

/// Annular sector. Scene angles run clockwise from 12 o'clock in radians;
/// Skia arcs run clockwise from 3 o'clock in degrees.
fn wedge_path(center: Point, inner: f32, outer: f32, start: f32, end: f32) -> Option<skia::Path> {
    let sweep = end - start;
    if sweep <= 0.0 || outer <= 0.0 {
        return None;
    }
    let c = sk_point(center);
    let mut path = skia::Path::new();

    if sweep >= TAU - 1e-4 {
        path.add_circle(c, outer, None);
        if inner > 0.0 {
            path.add_circle(c, inner, None);
            path.set_fill_type(skia::PathFillType::EvenOdd);
        }
        return Some(path);
    }

    let start_deg = start.to_degrees() - 90.0;
    let sweep_deg = sweep.to_degrees();
    let oval = |r: f32| skia::Rect::from_ltrb(c.x - r, c.y - r, c.x + r, c.y + r);
    if inner > 0.0 {
        path.arc_to(oval(outer), start_deg, sweep_deg, true);
        path.arc_to(oval(inner), start_deg + sweep_deg, -sweep_deg, false);
    } else {
        path.move_to(c);
        path.arc_to(oval(outer), start_deg, sweep_deg, false);
    }
    path.close();
    Some(path)
}

// ---- paint helpers ----------------------------------------------------------

fn sk_point(p: Point) -> skia::Point { skia::Point::new(p.x, p.y) }

/// Hex colors only; anything else (CSS names, rgb()) falls back to the default tone.
fn sk_color(color: &Color) -> skia::Color {
    let rgba = color.to_rgba().or_else(|err| {
        warn!(color = color.as_str(), %err, "unsupported color; using default tone");
        Color::from(DEFAULT_TONE).to_rgba()
    });
    match rgba {
        Ok(c) => skia::Color::from_argb(c.a, c.r, c.g, c.b),
        Err(_) => skia::Color::from_argb(255, 136, 132, 216),
    }
}

fn fill_paint(color: &Color, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    if opacity < 1.0 {
        let alpha = paint.alpha_f() * opacity.clamp(0.0, 1.0);
        paint.set_alpha_f(alpha);
    }
    paint
}

fn stroke_paint(color: &Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(sk_color(color));
    paint
}
