// File: crates/chart-core/tests/bar_mapping.rs
// Purpose: Bar-mode mapping: fixed layout, zero-height bars, overflow detection and invariants.

use chart_core::geometry::bar_in_canvas;
use chart_core::sample::from_static;
use chart_core::{map, map_bars, BarLayout, CanvasSpec, ChartKind, MapError, PlotBar, PlotShapes, Sample};
use proptest::prelude::*;

fn hourly() -> Vec<chart_core::Sample> {
    from_static(&[
        ("00:00", 10.0), ("04:00", 5.0), ("08:00", 45.0), ("12:00", 78.0),
        ("16:00", 65.0), ("20:00", 58.0), ("23:00", 15.0),
    ])
}

#[test]
fn hourly_usage_fits_default_layout() {
    let canvas = CanvasSpec::default();
    let bars = map_bars(&hourly(), &canvas, &BarLayout::default()).expect("fits");
    assert_eq!(bars.len(), 7);

    for (i, b) in bars.iter().enumerate() {
        assert_eq!(b.x, 50.0 + 90.0 * i as f64);
        assert_eq!(b.width, 60.0);
        assert_eq!(b.bottom(), canvas.baseline(), "bar {i} must stand on the baseline");
        assert!(bar_in_canvas(b, &canvas));
    }
    // 78 is the maximum and spans the whole plottable height.
    assert_eq!(bars[3].height, canvas.plot_height());
    assert_eq!(bars[3].y, canvas.margin_top);
    let expected = 45.0 / 78.0 * 200.0;
    assert!((bars[2].height - expected).abs() < 1e-9);
}

#[test]
fn zero_value_yields_zero_height_bar() {
    let samples = from_static(&[("a", 0.0), ("b", 20.0)]);
    let bars = map_bars(&samples, &CanvasSpec::default(), &BarLayout::default()).expect("map");
    assert_eq!(bars[0].height, 0.0);
    assert_eq!(bars[0].y, 250.0);
}

#[test]
fn all_zero_bars_do_not_divide_by_zero() {
    let samples = from_static(&[("a", 0.0), ("b", 0.0)]);
    let bars = map_bars(&samples, &CanvasSpec::default(), &BarLayout::default()).expect("map");
    for b in bars {
        assert_eq!(b.height, 0.0);
        assert!(b.y.is_finite());
    }
}

#[test]
fn too_many_bars_overflow_the_canvas() {
    let eight: Vec<(String, f64)> = (0..8).map(|i| (format!("h{i}"), i as f64)).collect();
    let samples = chart_core::ingest(eight, Default::default()).expect("valid");
    let err = map_bars(&samples, &CanvasSpec::default(), &BarLayout::default()).unwrap_err();
    match err {
        MapError::BarsOverflow { count, needed, available } => {
            assert_eq!(count, 8);
            assert_eq!(needed, 740.0);
            assert_eq!(available, 700.0);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(BarLayout::default().capacity(700.0), 7);
}

#[test]
fn tighter_layout_accepts_more_bars() {
    let samples: Vec<_> = (0..12)
        .map(|i| chart_core::Sample::new(format!("m{i}"), 10.0 + i as f64).expect("valid"))
        .collect();
    let layout = BarLayout::new(10.0, 40.0, 55.0);
    let bars = map_bars(&samples, &CanvasSpec::default(), &layout).expect("fits");
    assert_eq!(bars.len(), 12);
    assert_eq!(bars[11].right(), layout.extent(12));
}

#[test]
fn negative_layout_is_rejected() {
    let samples = hourly();
    let layout = BarLayout::new(50.0, 60.0, -10.0);
    assert!(matches!(
        map_bars(&samples, &CanvasSpec::default(), &layout),
        Err(MapError::BarsOverflow { .. })
    ));
}

#[test]
fn empty_bars_are_rejected() {
    assert_eq!(
        map_bars(&[], &CanvasSpec::default(), &BarLayout::default()),
        Err(MapError::EmptyInput)
    );
}

#[test]
fn dispatch_selects_shape_by_kind() {
    let samples = hourly();
    let canvas = CanvasSpec::default();
    let layout = BarLayout::default();

    let line = map(&samples, &canvas, &layout, ChartKind::Line).expect("line");
    assert!(matches!(line, PlotShapes::Points(_)));
    assert_eq!(line.len(), 7);

    let bars = map(&samples, &canvas, &layout, ChartKind::Bar).expect("bars");
    assert!(matches!(bars, PlotShapes::Bars(_)));
    assert!(!bars.is_empty());
}

fn bits(b: &PlotBar) -> [u64; 4] {
    [b.x.to_bits(), b.y.to_bits(), b.width.to_bits(), b.height.to_bits()]
}

#[test]
fn mapping_bars_twice_is_bit_identical() {
    let canvas = CanvasSpec::default();
    let layout = BarLayout::default();
    let first = map_bars(&hourly(), &canvas, &layout).expect("fits");
    let second = map_bars(&hourly(), &canvas, &layout).expect("fits");
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(bits(a), bits(b));
    }
}

fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec(0.0f64..1.0e6, 1..24).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Sample::new(format!("s{i}"), v).expect("non-negative"))
            .collect()
    })
}

// Vertical margins stay at least 1px so the plot band sits strictly inside the canvas.
fn canvas_strategy() -> impl Strategy<Value = CanvasSpec> {
    (1.0f64..2000.0, 4.0f64..1200.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..0.5).prop_map(|(w, h, t, b, l)| {
        let room = (h - 2.0) / 2.0;
        CanvasSpec::new(w, h, 1.0 + room * t * 0.9, 1.0 + room * b * 0.9, w * l * 0.9)
    })
}

// Includes negative fields so the rejection path is exercised too.
fn layout_strategy() -> impl Strategy<Value = BarLayout> {
    (-20.0f64..200.0, -10.0f64..120.0, -10.0f64..150.0).prop_map(|(o, w, s)| BarLayout::new(o, w, s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bars_fit_in_order_or_report_overflow(
        samples in samples_strategy(),
        canvas in canvas_strategy(),
        layout in layout_strategy(),
    ) {
        let needed = layout.extent(samples.len());
        let rejected = layout.origin_x < 0.0 || layout.bar_width < 0.0 || layout.spacing < 0.0 || needed > canvas.width;

        match map_bars(&samples, &canvas, &layout) {
            Err(MapError::BarsOverflow { count, available, .. }) => {
                prop_assert!(rejected, "layout {:?} fits {} but was rejected", layout, canvas.width);
                prop_assert_eq!(count, samples.len());
                prop_assert_eq!(available, canvas.width);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            Ok(bars) => {
                prop_assert!(!rejected, "layout {:?} overflows {} but was accepted", layout, canvas.width);
                prop_assert_eq!(bars.len(), samples.len());
                for w in bars.windows(2) {
                    prop_assert!(w[0].x <= w[1].x, "bars must follow input order");
                }
                let baseline = canvas.baseline();
                for b in &bars {
                    prop_assert!(b.height >= 0.0);
                    prop_assert!(bar_in_canvas(b, &canvas), "bar {:?} leaves canvas {:?}", b, canvas);
                    prop_assert!((b.bottom() - baseline).abs() <= 1e-9 * baseline.max(1.0));
                }
            }
        }
    }

    #[test]
    fn bar_mapping_is_idempotent(samples in samples_strategy(), canvas in canvas_strategy()) {
        let layout = BarLayout::new(0.0, 1.0, 1.0);
        let first = map_bars(&samples, &canvas, &layout);
        let second = map_bars(&samples, &canvas, &layout);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.len(), b.len());
                for (x, y) in a.iter().zip(&b) {
                    prop_assert_eq!(bits(x), bits(y));
                }
            }
            (a, b) => prop_assert_eq!(a, b),
        }
    }
}
