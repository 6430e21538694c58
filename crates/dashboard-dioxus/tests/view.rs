// File: crates/dashboard-dioxus/tests/view.rs
// Purpose: Chart view model built for the SvgChart component.

use chart_core::sample::from_static;
use chart_core::{Chart, MapError, PlotShapes, RenderOptions, Theme};
use waterflow_dioxus::ChartView;

fn week() -> Chart {
    Chart::line(from_static(&[("Mon", 210.0), ("Tue", 245.0), ("Wed", 220.0)]))
}

#[test]
fn line_view_carries_points_and_gradient() {
    let view = ChartView::build(&week(), &RenderOptions::default()).expect("view");
    assert_eq!(view.class, "line-chart");
    assert_eq!(view.view_box, "0 0 700 300");
    assert_eq!(view.gridlines, vec![50.0, 100.0, 150.0, 200.0, 250.0]);
    assert_eq!(view.paint, "url(#ui-lineGradient-light)");
    assert_eq!(view.fade, "0.3");
    assert!(view.points.starts_with("25,"));
    assert_eq!(view.points.split(' ').count(), 3);
    assert_eq!(view.legend, vec!["Mon: 210L", "Tue: 245L", "Wed: 220L"]);
    let PlotShapes::Points(points) = &view.shapes else { panic!("expected points") };
    assert_eq!(points[1].y, 50.0);
}

#[test]
fn flat_line_uses_solid_paint() {
    let chart = Chart::line(from_static(&[("a", 0.0), ("b", 0.0)]));
    let view = ChartView::build(&chart, &RenderOptions::default()).expect("view");
    assert_eq!(view.paint, Theme::light().accent_start);
}

#[test]
fn bar_view_has_rectangles_and_no_points() {
    let chart = Chart::bar(from_static(&[("00:00", 10.0), ("12:00", 78.0)]));
    let view = ChartView::build(&chart, &RenderOptions::default()).expect("view");
    assert_eq!(view.class, "bar-chart");
    assert!(view.points.is_empty());
    assert_eq!(view.fade, "1");
    let PlotShapes::Bars(bars) = &view.shapes else { panic!("expected bars") };
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[1].x, 140.0);
    assert_eq!(bars[1].height, 200.0);
}

#[test]
fn axes_follow_render_options() {
    let mut opts = RenderOptions::default();
    let view = ChartView::build(&week(), &opts).expect("view");
    assert_eq!(view.axes, Some([(25.0, 25.0, 25.0, 250.0), (25.0, 250.0, 700.0, 250.0)]));

    opts.draw_axes = false;
    assert_eq!(ChartView::build(&week(), &opts).expect("view").axes, None);
}

#[test]
fn mapping_errors_propagate() {
    let empty = Chart::line(Vec::new());
    assert!(matches!(ChartView::build(&empty, &RenderOptions::default()), Err(MapError::EmptyInput)));
}
