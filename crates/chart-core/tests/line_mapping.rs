// File: crates/chart-core/tests/line_mapping.rs
// Purpose: Line-mode coordinate mapping: worked examples, edge cases and invariants.

use chart_core::geometry::point_in_canvas;
use chart_core::sample::from_static;
use chart_core::{map_line, CanvasSpec, MapError, Sample};
use proptest::prelude::*;

fn canvas_top25() -> CanvasSpec {
    CanvasSpec::new(700.0, 300.0, 25.0, 50.0, 25.0)
}

#[test]
fn maximum_maps_to_top_and_smaller_values_scale_down() {
    let samples = from_static(&[("Mon", 210.0), ("Tue", 245.0)]);
    let points = map_line(&samples, &canvas_top25()).expect("map");

    assert_eq!(points.len(), 2);
    assert!((points[1].y - 25.0).abs() < 1e-9, "max sample should sit on margin_top, got {}", points[1].y);
    let expected = 25.0 + (1.0 - 210.0 / 245.0) * 225.0;
    assert!((points[0].y - expected).abs() < 1e-9);
    assert!((points[0].y - 57.14).abs() < 0.01);

    // First and last points span the plottable width.
    assert_eq!(points[0].x, 25.0);
    assert_eq!(points[1].x, 675.0);
}

#[test]
fn default_canvas_matches_dashboard_layout() {
    let week = from_static(&[
        ("Mon", 210.0), ("Tue", 220.0), ("Wed", 205.0), ("Thu", 240.0),
        ("Fri", 245.0), ("Sat", 230.0), ("Sun", 245.0),
    ]);
    let points = map_line(&week, &CanvasSpec::default()).expect("map");
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let step = 650.0 / 6.0;
    for (i, x) in xs.iter().enumerate() {
        assert!((x - (25.0 + step * i as f64)).abs() < 1e-9);
    }
    // Both 245 readings reach the top of the plottable area.
    assert_eq!(points[4].y, 50.0);
    assert_eq!(points[6].y, 50.0);
}

#[test]
fn all_zero_series_collapses_to_baseline() {
    let zeros = from_static(&[("a", 0.0), ("b", 0.0), ("c", 0.0)]);
    for canvas in [CanvasSpec::default(), canvas_top25(), CanvasSpec::new(120.0, 80.0, 5.0, 10.0, 4.0)] {
        let points = map_line(&zeros, &canvas).expect("map");
        assert_eq!(points.len(), 3);
        for p in &points {
            assert!(p.y.is_finite());
            assert_eq!(p.y, canvas.height - canvas.margin_bottom);
        }
    }
}

#[test]
fn single_sample_sits_on_left_margin() {
    let one = from_static(&[("X", 50.0)]);
    let canvas = CanvasSpec::default();
    let points = map_line(&one, &canvas).expect("map");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].x, canvas.margin_left);
    assert_eq!(points[0].y, canvas.margin_top);
}

#[test]
fn empty_input_is_rejected() {
    let err = map_line(&[], &CanvasSpec::default()).unwrap_err();
    assert_eq!(err, MapError::EmptyInput);
    assert!(err.to_string().contains("empty"));
}

#[test]
fn invalid_canvas_is_rejected_before_mapping() {
    let samples = from_static(&[("a", 1.0)]);
    let too_wide_margins = CanvasSpec::new(40.0, 300.0, 10.0, 10.0, 30.0);
    assert!(matches!(map_line(&samples, &too_wide_margins), Err(MapError::InvalidCanvas(_))));

    let nan = CanvasSpec::new(f64::NAN, 300.0, 10.0, 10.0, 10.0);
    assert!(matches!(map_line(&samples, &nan), Err(MapError::InvalidCanvas(_))));

    let tall_margins = CanvasSpec::new(700.0, 50.0, 30.0, 30.0, 10.0);
    assert!(matches!(map_line(&samples, &tall_margins), Err(MapError::InvalidCanvas(_))));
}

#[test]
fn mapping_is_bit_identical_across_calls() {
    let samples = from_static(&[("00:00", 10.0), ("04:00", 5.0), ("08:00", 45.0), ("12:00", 78.0)]);
    let canvas = CanvasSpec::default();
    let a = map_line(&samples, &canvas).expect("first");
    let b = map_line(&samples, &canvas).expect("second");
    for (p, q) in a.iter().zip(&b) {
        assert_eq!(p.x.to_bits(), q.x.to_bits());
        assert_eq!(p.y.to_bits(), q.y.to_bits());
    }
}

fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec(0.0f64..1.0e6, 1..64).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Sample::new(format!("s{i}"), v).expect("non-negative"))
            .collect()
    })
}

fn canvas_strategy() -> impl Strategy<Value = CanvasSpec> {
    (1.0f64..2000.0, 1.0f64..1200.0, 0.0f64..0.5, 0.0f64..0.5, 0.0f64..0.5).prop_map(|(w, h, t, b, l)| {
        let top = h * t * 0.9;
        let bottom = h * b * 0.9;
        let left = w * l * 0.9;
        CanvasSpec::new(w, h, top, bottom, left)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn output_preserves_length_order_and_bounds(samples in samples_strategy(), canvas in canvas_strategy()) {
        let points = map_line(&samples, &canvas).expect("valid input maps");
        prop_assert_eq!(points.len(), samples.len());
        for w in points.windows(2) {
            prop_assert!(w[0].x <= w[1].x, "x must follow input order");
        }
        for p in &points {
            prop_assert!(p.x.is_finite() && p.y.is_finite());
            prop_assert!(point_in_canvas(p, &canvas), "point {:?} leaves canvas {:?}", p, canvas);
            prop_assert!(p.y >= canvas.margin_top - 1e-9 && p.y <= canvas.baseline() + 1e-9);
        }
    }

    #[test]
    fn larger_values_never_sit_lower(samples in samples_strategy()) {
        let canvas = CanvasSpec::default();
        let points = map_line(&samples, &canvas).expect("map");
        for (i, a) in samples.iter().enumerate() {
            for (j, b) in samples.iter().enumerate() {
                if a.value() > b.value() {
                    prop_assert!(points[i].y <= points[j].y);
                }
            }
        }
    }
}
