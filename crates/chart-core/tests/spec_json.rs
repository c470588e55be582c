// File: crates/chart-core/tests/spec_json.rs
// Purpose: JSON surface of ChartSpec (camelCase, chart.js aliases, unknown kinds) and tree output.

use dashchart_core::{adapt, ChartKind, ChartSpec, Height, IndexAxis, LegendAlign, SeriesColor};

#[test]
fn decodes_camel_case_spec() {
    let json = r##"{
        "kind": "bar",
        "categories": ["Mon", "Tue"],
        "series": [{ "name": "Check-ins", "values": [12, 30], "color": "#22c55e" }],
        "options": { "axisOrientation": "y", "maintainAspectRatio": false, "legendAlign": "left" }
    }"##;
    let spec = ChartSpec::from_json(json).unwrap();
    assert_eq!(spec.kind, ChartKind::Bar);
    assert_eq!(spec.series[0].values, vec![12.0, 30.0]);
    assert!(matches!(spec.series[0].color, Some(SeriesColor::Single(_))));

    let opts = spec.options.resolve();
    assert_eq!(opts.index_axis, IndexAxis::Y);
    assert_eq!(opts.height, Height::Fill);
    assert_eq!(opts.legend_align, LegendAlign::Left);
}

#[test]
fn accepts_chartjs_style_names() {
    let json = r##"{
        "type": "doughnut",
        "labels": ["Paid", "Comp"],
        "datasets": [{ "label": "Tickets", "data": [80, 20], "backgroundColor": ["#111", "#222"] }],
        "options": { "indexAxis": "x" }
    }"##;
    let spec = ChartSpec::from_json(json).unwrap();
    assert_eq!(spec.kind, ChartKind::Doughnut);
    assert_eq!(spec.categories, vec!["Paid", "Comp"]);
    assert_eq!(spec.series[0].name.as_deref(), Some("Tickets"));
    match &spec.series[0].color {
        Some(SeriesColor::PerPoint(colors)) => assert_eq!(colors.len(), 2),
        other => panic!("expected per-point colors, got {other:?}"),
    }
}

#[test]
fn unknown_kind_is_kept_rather_than_rejected() {
    let spec = ChartSpec::from_json(r#"{ "type": "radar", "labels": ["a"] }"#).unwrap();
    assert_eq!(spec.kind, ChartKind::Unsupported("radar".into()));
    assert!(!spec.kind.is_supported());
    assert!(adapt(&spec).is_unsupported());
}

#[test]
fn kind_names_are_case_insensitive() {
    assert_eq!(ChartKind::from("Line"), ChartKind::Line);
    assert_eq!(ChartKind::from(" AREA "), ChartKind::Area);
}

#[test]
fn null_values_decode_as_gaps() {
    let spec = ChartSpec::from_json(r#"{"type":"line","labels":["a","b","c"],"datasets":[{"data":[1,null,3]}]}"#).unwrap();
    assert_eq!(spec.series[0].values[0], 1.0);
    assert!(spec.series[0].values[1].is_nan());
}

#[test]
fn malformed_json_is_an_error() {
    let err = ChartSpec::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid chart spec"));
}

#[test]
fn spec_round_trips_through_json() {
    let json = r##"{"kind":"line","categories":["a","b"],"series":[{"values":[1,2]}]}"##;
    let spec = ChartSpec::from_json(json).unwrap();
    let again = ChartSpec::from_json(&spec.to_json_pretty().unwrap()).unwrap();
    assert_eq!(spec, again);
}

#[test]
fn render_tree_serializes_with_type_tags() {
    let spec = ChartSpec::from_json(r#"{"kind":"pie","categories":["a"],"series":[{"values":[3]}]}"#).unwrap();
    let tree = adapt(&spec);
    assert_eq!(tree.container().height.css(), "300px");
    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(value["type"], "pie");
    assert_eq!(value["container"]["height"]["mode"], "fixed");
    assert_eq!(value["container"]["height"]["value"], 300);
    assert_eq!(value["wedges"][0]["fill"], "#0088FE");
    assert_eq!(value["legend"]["align"], "right");
}
