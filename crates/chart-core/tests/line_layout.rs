// File: crates/chart-core/tests/line_layout.rs
// Purpose: Sample normalization, padding and degenerate inputs of the line chart.

use chart_core::line::{label_positions, sample_x, value_range, AXIS_PADDING};
use chart_core::LineLayout;

const EPS: f32 = 1e-4;

#[test]
fn end_to_end_scenario_without_axis() {
    let layout = LineLayout::compute(&[10.0, 20.0, 10.0, 30.0], 300.0, 60.0, false).expect("layout");
    assert_eq!(layout.padding, 0.0);
    assert_eq!((layout.min, layout.max, layout.range), (10.0, 30.0, 20.0));

    let ys: Vec<f32> = layout.points.iter().map(|p| p.y).collect();
    assert!((ys[0] - 60.0).abs() < EPS, "min sits on the bottom edge");
    assert!((ys[1] - 30.0).abs() < EPS, "20 is halfway");
    assert!((ys[2] - 60.0).abs() < EPS);
    assert!((ys[3] - 0.0).abs() < EPS, "max sits on the top edge");

    let xs: Vec<f32> = layout.points.iter().map(|p| p.x).collect();
    assert!((xs[0] - 0.0).abs() < EPS);
    assert!((xs[1] - 100.0).abs() < EPS);
    assert!((xs[3] - 300.0).abs() < EPS);
}

#[test]
fn every_point_stays_inside_padding() {
    let samples: Vec<f64> = (0..50).map(|i| ((i as f64) * 0.37).sin() * 40.0 - 3.0).collect();
    for show_axis in [false, true] {
        let layout = LineLayout::compute(&samples, 240.0, 200.0, show_axis).expect("layout");
        let p = layout.padding;
        for pt in &layout.points {
            assert!(pt.y >= p - EPS && pt.y <= 200.0 - p + EPS, "y {} outside [{}, {}]", pt.y, p, 200.0 - p);
            assert!(pt.x >= p - EPS && pt.x <= 240.0 - p + EPS);
        }
    }
}

#[test]
fn axis_padding_applies_on_all_sides() {
    let layout = LineLayout::compute(&[0.0, 1.0], 200.0, 100.0, true).expect("layout");
    assert_eq!(layout.padding, AXIS_PADDING);
    assert_eq!(layout.chart_width(), 160.0);
    assert_eq!(layout.chart_height(), 60.0);
    assert_eq!(layout.baseline_y(), 80.0);
    assert!((layout.points[0].y - 80.0).abs() < EPS);
    assert!((layout.points[1].y - 20.0).abs() < EPS);
    assert!((layout.points[1].x - 180.0).abs() < EPS);
}

#[test]
fn flat_series_draws_at_one_height() {
    let layout = LineLayout::compute(&[7.0, 7.0, 7.0], 90.0, 60.0, false).expect("layout");
    assert_eq!(layout.range, 1.0);
    assert!(layout.points.iter().all(|p| p.y.is_finite() && (p.y - 60.0).abs() < EPS));
}

#[test]
fn single_sample_is_centered() {
    let layout = LineLayout::compute(&[42.0], 120.0, 60.0, false).expect("layout");
    assert_eq!(layout.points.len(), 1);
    assert!((layout.points[0].x - 60.0).abs() < EPS);
    assert!(layout.points[0].y.is_finite());

    let with_axis = LineLayout::compute(&[42.0], 120.0, 60.0, true).expect("layout");
    assert!((with_axis.points[0].x - 60.0).abs() < EPS);
    assert_eq!(sample_x(0, 1, 0.0, 10.0), 5.0);
}

#[test]
fn empty_series_has_no_layout() {
    assert!(LineLayout::compute(&[], 100.0, 60.0, true).is_none());
    assert!(value_range(&[]).is_none());
}

#[test]
fn area_path_closes_along_the_bottom_edge() {
    let layout = LineLayout::compute(&[1.0, 3.0, 2.0], 100.0, 50.0, false).expect("layout");
    let area = layout.area_path();
    // 3 polyline points + 2 baseline corners
    assert_eq!(area.count_points(), 5);
    let b = area.bounds();
    assert!((b.bottom - 50.0).abs() < EPS);
    assert!((b.left - 0.0).abs() < EPS && (b.right - 100.0).abs() < EPS);
    assert_eq!(layout.stroke_path().count_points(), 3);
}

#[test]
fn labels_spread_edge_to_edge() {
    assert_eq!(label_positions(5, 200.0), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    assert_eq!(label_positions(1, 200.0), vec![0.0]);
    assert!(label_positions(0, 200.0).is_empty());
}
