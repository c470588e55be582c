// File: crates/chart-core/src/svg.rs
// Summary: Serializes a laid-out scene as a standalone SVG document.

use std::f32::consts::{PI, TAU};
use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::geometry::Point;
use crate::scene::{PathCmd, Primitive, Scene, TextAnchor};

/// Render `scene` to an SVG string. Output is byte-stable for equal scenes.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(4096);
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    );
    out.push('\n');
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, escape(scene.background.as_str()));
    for item in &scene.items {
        write_primitive(&mut out, item);
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

/// Render `scene` and write it to `path`, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg(scene))?;
    Ok(())
}

fn num(v: f32) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        if !d.is_empty() {
            d.push(' ');
        }
        match cmd {
            PathCmd::MoveTo(p) => { let _ = write!(d, "M{},{}", num(p.x), num(p.y)); }
            PathCmd::LineTo(p) => { let _ = write!(d, "L{},{}", num(p.x), num(p.y)); }
            PathCmd::CubicTo(c1, c2, p) => {
                let _ = write!(d, "C{},{} {},{} {},{}", num(c1.x), num(c1.y), num(c2.x), num(c2.y), num(p.x), num(p.y));
            }
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}

fn arc_to(d: &mut String, r: f32, to: Point, large: bool, clockwise: bool) {
    let _ = write!(
        d,
        " A{r},{r} 0 {} {} {},{}",
        large as u8,
        clockwise as u8,
        num(to.x),
        num(to.y),
        r = num(r)
    );
}

/// SVG path of an annular sector. A full turn is drawn as two half arcs,
/// since a single arc with identical end points renders nothing.
fn wedge_path(center: Point, inner: f32, outer: f32, start: f32, end: f32) -> String {
    let sweep = end - start;
    let full = sweep >= TAU - 1e-4;
    let mut d = String::new();
    let o0 = center.polar(outer, start);
    let _ = write!(d, "M{},{}", num(o0.x), num(o0.y));
    if full {
        arc_to(&mut d, outer, center.polar(outer, start + PI), false, true);
        arc_to(&mut d, outer, o0, false, true);
    } else {
        arc_to(&mut d, outer, center.polar(outer, end), sweep > PI, true);
    }
    if inner > 0.0 {
        let i_end = center.polar(inner, end);
        if full {
            let i0 = center.polar(inner, start);
            let _ = write!(d, " M{},{}", num(i0.x), num(i0.y));
            arc_to(&mut d, inner, center.polar(inner, start + PI), false, false);
            arc_to(&mut d, inner, i0, false, false);
        } else {
            let _ = write!(d, " L{},{}", num(i_end.x), num(i_end.y));
            arc_to(&mut d, inner, center.polar(inner, start), sweep > PI, false);
        }
    } else if !full {
        let _ = write!(d, " L{},{}", num(center.x), num(center.y));
    }
    d.push_str(" Z");
    d
}

fn write_primitive(out: &mut String, item: &Primitive) {
    match item {
        Primitive::Rect { rect, fill } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                num(rect.left),
                num(rect.top),
                num(rect.width()),
                num(rect.height()),
                escape(fill.as_str())
            );
        }
        Primitive::Line { from, to, stroke, width } => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                escape(stroke.as_str()),
                num(*width)
            );
        }
        Primitive::Path { cmds, stroke, fill, fill_opacity, stroke_width } => {
            let fill_attr = match fill {
                Some(c) => format!(r#"fill="{}" fill-opacity="{}""#, escape(c.as_str()), num(*fill_opacity)),
                None => r#"fill="none""#.to_string(),
            };
            let stroke_attr = match stroke {
                Some(c) => format!(r#"stroke="{}" stroke-width="{}""#, escape(c.as_str()), num(*stroke_width)),
                None => r#"stroke="none""#.to_string(),
            };
            let _ = write!(out, r#"<path d="{}" {} {}/>"#, path_data(cmds), fill_attr, stroke_attr);
        }
        Primitive::Wedge { center, inner_radius, outer_radius, start_angle, end_angle, fill } => {
            if end_angle - start_angle <= 0.0 {
                let _ = write!(out, "<!-- empty wedge -->");
                return;
            }
            let _ = write!(
                out,
                r#"<path d="{}" fill="{}" fill-rule="evenodd"/>"#,
                wedge_path(*center, *inner_radius, *outer_radius, *start_angle, *end_angle),
                escape(fill.as_str())
            );
        }
        Primitive::Text { at, text, size, color, anchor } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" fill="{}" text-anchor="{}">{}</text>"#,
                num(at.x),
                num(at.y),
                num(*size),
                escape(color.as_str()),
                anchor,
                escape(text)
            );
        }
    }
}
