// File: crates/chart-core/tests/options.rs
// Purpose: Option defaults and how resolved options shape the render tree.

use dashchart_core::tree::Legend;
use dashchart_core::{adapt, ChartOptions, ChartSpec, Height, IndexAxis, LegendAlign, ResolvedOptions, SeriesSpec};

fn spec(kind: &str, options: ChartOptions) -> ChartSpec {
    ChartSpec::new(kind, ["a", "b"]).with_series(SeriesSpec::new(vec![1.0, 2.0])).with_options(options)
}

#[test]
fn defaults_are_category_x_fixed_300_legend_right() {
    let r = ChartOptions::default().resolve();
    assert_eq!(r.index_axis, IndexAxis::X);
    assert_eq!(r.height, Height::Fixed(300));
    assert_eq!(r.legend_align, LegendAlign::Right);
    assert!(r.show_legend && r.show_grid);
    assert_eq!(ResolvedOptions::default(), r);
}

#[test]
fn only_an_explicit_false_aspect_ratio_fills_the_parent() {
    let keep = ChartOptions { maintain_aspect_ratio: Some(true), ..Default::default() };
    assert_eq!(keep.resolve().height, Height::Fixed(300));
    assert_eq!(ChartOptions::default().fill_height().resolve().height, Height::Fill);
    assert_eq!(Height::Fill.resolve(720), 720);
    assert_eq!(Height::Fixed(300).resolve(720), 300);
}

#[test]
fn every_kind_carries_the_resolved_container_height() {
    for kind in ["bar", "line", "area", "pie", "doughnut", "gauge"] {
        let tree = adapt(&spec(kind, ChartOptions::default().fill_height()));
        assert_eq!(tree.container().height, Height::Fill, "{kind}");
    }
}

#[test]
fn legend_can_be_hidden_or_moved() {
    let hidden = ChartOptions { show_legend: Some(false), ..Default::default() };
    assert_eq!(adapt(&spec("bar", hidden.clone())).as_cartesian().unwrap().legend, None);
    assert_eq!(adapt(&spec("pie", hidden)).as_pie().unwrap().legend, None);

    let left = adapt(&spec("area", ChartOptions::default().legend_left()));
    assert_eq!(left.as_cartesian().unwrap().legend, Some(Legend::vertical(LegendAlign::Left)));
}

#[test]
fn grid_follows_show_grid() {
    let off = ChartOptions { show_grid: Some(false), ..Default::default() };
    assert!(!adapt(&spec("line", off)).as_cartesian().unwrap().grid);
    assert!(adapt(&spec("line", ChartOptions::default())).as_cartesian().unwrap().grid);
}
