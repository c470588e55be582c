// File: crates/chart-core/tests/curve.rs
// Purpose: Monotone interpolation passes through every point and does not overshoot.

use dashchart_core::curve::{monotone_tangents, monotone_x};
use dashchart_core::geometry::Point;
use dashchart_core::scene::PathCmd;

fn pts(ys: &[f32]) -> Vec<Point> {
    ys.iter().enumerate().map(|(i, &y)| Point::new(i as f32 * 10.0, y)).collect()
}

#[test]
fn short_inputs_degrade_gracefully() {
    assert!(monotone_x(&[]).is_empty());
    assert_eq!(monotone_x(&pts(&[5.0])), vec![PathCmd::MoveTo(Point::new(0.0, 5.0))]);
    assert_eq!(
        monotone_x(&pts(&[5.0, 7.0])),
        vec![PathCmd::MoveTo(Point::new(0.0, 5.0)), PathCmd::LineTo(Point::new(10.0, 7.0))]
    );
}

#[test]
fn curve_passes_through_every_point() {
    let points = pts(&[0.0, 40.0, 10.0, 25.0, 25.0]);
    let cmds = monotone_x(&points);
    assert_eq!(cmds.len(), points.len());
    assert_eq!(cmds[0], PathCmd::MoveTo(points[0]));
    for (cmd, p) in cmds.iter().skip(1).zip(points.iter().skip(1)) {
        match cmd {
            PathCmd::CubicTo(_, _, end) => assert_eq!(end, p),
            other => panic!("expected cubic, got {other:?}"),
        }
    }
}

#[test]
fn control_points_stay_within_each_segment() {
    let points = pts(&[0.0, 40.0, 10.0, 25.0, 25.0, 90.0]);
    let cmds = monotone_x(&points);
    for (i, cmd) in cmds.iter().skip(1).enumerate() {
        let (a, b) = (points[i], points[i + 1]);
        let (lo, hi) = (a.y.min(b.y) - 1e-3, a.y.max(b.y) + 1e-3);
        if let PathCmd::CubicTo(c1, c2, _) = cmd {
            assert!(c1.y >= lo && c1.y <= hi, "c1 overshoots segment {i}: {c1:?}");
            assert!(c2.y >= lo && c2.y <= hi, "c2 overshoots segment {i}: {c2:?}");
            assert!(c1.x > a.x && c2.x < b.x);
        }
    }
}

#[test]
fn local_extrema_and_flat_runs_have_zero_tangent() {
    let t = monotone_tangents(&pts(&[0.0, 40.0, 10.0, 10.0, 10.0]));
    assert_eq!(t[1], 0.0); // peak
    assert_eq!(t[3], 0.0); // flat
}

#[test]
fn straight_lines_stay_straight() {
    let t = monotone_tangents(&pts(&[0.0, 10.0, 20.0, 30.0]));
    for slope in t {
        assert!((slope - 1.0).abs() < 1e-5, "slope {slope}");
    }
}
