// File: crates/chart-core/tests/color.rs
// Purpose: Color fallback policy and hex parsing.

use dashchart_core::color::{default_palette, palette_color, Rgba};
use dashchart_core::{adapt, resolve_color, resolve_series_color, ChartSpec, Color, SeriesSpec, DEFAULT_PALETTE, DEFAULT_TONE};

#[test]
fn uncolored_wedges_cycle_the_default_palette_wrapping_at_five() {
    let categories: Vec<String> = (0..12).map(|i| format!("c{i}")).collect();
    let spec = ChartSpec::new("pie", categories).with_series(SeriesSpec::new(vec![1.0; 12]));
    let pie = adapt(&spec).as_pie().cloned().unwrap();
    for (i, wedge) in pie.wedges.iter().enumerate() {
        assert_eq!(wedge.fill, Color::from(DEFAULT_PALETTE[i % 5]), "wedge {i}");
    }
    assert_eq!(pie.wedges[5].fill, pie.wedges[0].fill);
}

#[test]
fn per_point_colors_wrap_by_row_position() {
    let series = SeriesSpec::new(vec![1.0; 5]).with_point_colors(["#111111", "#222222"]);
    let palette = default_palette();
    let got: Vec<_> = (0..5).map(|i| resolve_color(&series, i, &palette)).collect();
    let want: Vec<Color> = ["#111111", "#222222", "#111111", "#222222", "#111111"].into_iter().map(Color::from).collect();
    assert_eq!(got, want);
}

#[test]
fn single_color_paints_every_point_and_the_whole_series() {
    let series = SeriesSpec::new(vec![1.0, 2.0]).with_color("hsl(var(--chart-1))");
    let palette = default_palette();
    assert_eq!(resolve_color(&series, 0, &palette), Color::from("hsl(var(--chart-1))"));
    assert_eq!(resolve_color(&series, 7, &palette), Color::from("hsl(var(--chart-1))"));
    assert_eq!(resolve_series_color(&series, 3, &palette), Color::from("hsl(var(--chart-1))"));
}

#[test]
fn uncolored_series_cycle_the_palette_by_position() {
    let palette = default_palette();
    let series = SeriesSpec::new(vec![1.0]);
    assert_eq!(resolve_series_color(&series, 0, &palette), Color::from(DEFAULT_PALETTE[0]));
    assert_eq!(resolve_series_color(&series, 1, &palette), Color::from(DEFAULT_PALETTE[1]));
    assert_eq!(resolve_series_color(&series, 5, &palette), Color::from(DEFAULT_PALETTE[0]));

    let mut spec = ChartSpec::new("bar", ["a"]);
    for v in 0..7 {
        spec = spec.with_series(SeriesSpec::new(vec![v as f64]));
    }
    let chart = adapt(&spec).as_cartesian().cloned().unwrap();
    for (i, mark) in chart.marks.iter().enumerate() {
        assert_eq!(mark.color(), &Color::from(DEFAULT_PALETTE[i % 5]), "series {i}");
    }
    assert_eq!(chart.marks[5].color(), chart.marks[0].color());
}

#[test]
fn explicit_colors_do_not_shift_the_palette_position() {
    let spec = ChartSpec::new("line", ["a"])
        .with_series(SeriesSpec::new(vec![1.0]).with_color("#123456"))
        .with_series(SeriesSpec::new(vec![2.0]));
    let chart = adapt(&spec).as_cartesian().cloned().unwrap();
    assert_eq!(chart.marks[0].color(), &Color::from("#123456"));
    assert_eq!(chart.marks[1].color(), &Color::from(DEFAULT_PALETTE[1]));
}

#[test]
fn per_point_sequence_on_a_cartesian_series_uses_its_first_entry() {
    let palette = default_palette();
    let series = SeriesSpec::new(vec![1.0]).with_point_colors(["#abcdef", "#000000"]);
    assert_eq!(resolve_series_color(&series, 2, &palette), Color::from("#abcdef"));
    let empty = SeriesSpec::new(vec![1.0]).with_point_colors(Vec::<String>::new());
    assert_eq!(resolve_series_color(&empty, 2, &palette), Color::from(DEFAULT_PALETTE[2]));
    assert_eq!(resolve_color(&empty, 3, &palette), Color::from(DEFAULT_PALETTE[3]));
}

#[test]
fn empty_palette_falls_back_to_default_tone() {
    assert_eq!(palette_color(&[], 4), Color::from(DEFAULT_TONE));
}

#[test]
fn hex_literals_parse_to_rgba() {
    assert_eq!(Color::from("#0088FE").to_rgba().unwrap(), Rgba::new(0x00, 0x88, 0xFE, 255));
    assert_eq!(Color::from("#fff").to_rgba().unwrap(), Rgba::new(255, 255, 255, 255));
    assert_eq!(Color::from("#10203040").to_rgba().unwrap(), Rgba::new(0x10, 0x20, 0x30, 0x40));
    assert!(Color::from("red").to_rgba().is_err());
    assert!(Color::from("#12345").to_rgba().is_err());
    assert!(Color::from("#gggggg").to_rgba().is_err());
}
