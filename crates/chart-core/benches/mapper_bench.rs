use anyhow::Result;
use chart_core::{map_bars, map_line, BarLayout, CanvasSpec, Chart, RenderOptions, Sample};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_samples(n: usize) -> Vec<Sample> {
    (0..n)
        .filter_map(|i| {
            let v = (i as f64 * 0.01).sin().abs() * 250.0;
            Sample::new(format!("t{i}"), v).ok()
        })
        .collect()
}

fn bench_map(c: &mut Criterion) {
    let canvas = CanvasSpec::default();
    let mut group = c.benchmark_group("map_line");
    for &n in &[7usize, 1_000, 100_000] {
        let samples = build_samples(n);
        group.bench_function(format!("n_{n}"), |b| {
            b.iter(|| black_box(map_line(&samples, &canvas)))
        });
    }
    group.finish();

    let hourly = build_samples(7);
    c.bench_function("map_bars_hourly", |b| {
        b.iter(|| black_box(map_bars(&hourly, &canvas, &BarLayout::default())))
    });
}

fn bench_render(c: &mut Criterion) {
    let chart = Chart::line(build_samples(7));
    let opts = RenderOptions::default();
    c.bench_function("render_svg_week", |b| {
        b.iter(|| black_box(chart.render_to_svg_string(&opts)))
    });
    c.bench_function("render_png_week", |b| {
        b.iter(|| -> Result<()> {
            let bytes = chart.render_to_png_bytes(&opts)?;
            black_box(bytes);
            Ok(())
        })
    });
}

criterion_group!(benches, bench_map, bench_render);
criterion_main!(benches);
