// File: crates/chart-render-skia/tests/png.rs
// Purpose: PNG/RGBA smoke tests; decode output with `image` and check a few pixels.

use dashchart_core::{adapt, layout, ChartSpec, Scene, SeriesSpec, Theme, Viewport};
use dashchart_render_skia::{render_to_png, render_to_png_bytes, render_to_rgba8, RasterOptions};

fn no_text() -> RasterOptions {
    RasterOptions { draw_text: false }
}

fn scene(spec: &ChartSpec, theme: &Theme) -> Scene {
    layout(&adapt(spec), &Viewport::new(480, 400), theme)
}

#[test]
fn png_decodes_with_scene_dimensions() {
    let spec = ChartSpec::new("bar", ["Jan", "Feb", "Mar"])
        .with_series(SeriesSpec::new(vec![120.0, 340.0, 280.0]).named("Sold"));
    let bytes = render_to_png_bytes(&scene(&spec, &Theme::light()), &RasterOptions::default()).expect("png");
    assert_eq!(&bytes[..4], b"\x89PNG");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (480, 300));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn rgba_buffer_shape_and_background() {
    let spec = ChartSpec::new("line", ["a", "b", "c"]).with_series(SeriesSpec::new(vec![1.0, 3.0, 2.0]));
    let (px, w, h, stride) = render_to_rgba8(&scene(&spec, &Theme::dark()), &no_text()).expect("rgba render");
    assert_eq!((w, h), (480, 300));
    assert_eq!(px.len(), w as usize * h as usize * 4);
    assert_eq!(stride, w as usize * 4);
    // #121214
    assert_eq!(&px[..4], &[0x12, 0x12, 0x14, 255]);
}

#[test]
fn single_wedge_fills_the_pie_center() {
    let spec = ChartSpec::new("pie", ["Only"]).with_series(SeriesSpec::new(vec![5.0]).with_color("#FF0000"));
    let (px, w, _, stride) = render_to_rgba8(&scene(&spec, &Theme::light()), &no_text()).expect("rgba render");
    // Chart area is the frame minus the right legend strip.
    let (cx, cy) = ((w as usize - 120) / 2, 150usize);
    let i = cy * stride + cx * 4;
    assert_eq!(&px[i..i + 4], &[255, 0, 0, 255]);
}

#[test]
fn doughnut_hole_shows_the_background() {
    let spec = ChartSpec::new("doughnut", ["A", "B"]).with_series(SeriesSpec::new(vec![1.0, 1.0]).with_color("#00FF00"));
    let (px, w, _, stride) = render_to_rgba8(&scene(&spec, &Theme::light()), &no_text()).expect("rgba render");
    let (cx, cy) = ((w as usize - 120) / 2, 150usize);
    let i = cy * stride + cx * 4;
    assert_eq!(&px[i..i + 4], &[255, 255, 255, 255]);
}

#[test]
fn png_file_is_written_under_new_directories() {
    let dir = std::env::temp_dir().join(format!("dashchart-png-{}", std::process::id()));
    let out = dir.join("nested/chart.png");
    let spec = ChartSpec::new("funnel", ["a"]);
    render_to_png(&scene(&spec, &Theme::light()), &RasterOptions::default(), &out).expect("write png");
    let img = image::open(&out).expect("open png");
    assert_eq!((img.width(), img.height()), (480, 300));
    std::fs::remove_dir_all(&dir).ok();
}
