use dashchart_core::{adapt, layout, to_svg, ChartSpec, SeriesSpec, Theme, Viewport};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_spec(kind: &str, n: usize, series: usize) -> ChartSpec {
    let categories: Vec<String> = (0..n).map(|i| format!("day {i}")).collect();
    let mut spec = ChartSpec::new(kind, categories);
    for s in 0..series {
        let values = (0..n).map(|i| ((i + s * 7) as f64 * 0.05).sin() * 50.0 + 60.0).collect();
        spec = spec.with_series(SeriesSpec::new(values));
    }
    spec
}

fn bench_adapt(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapt");
    for &n in &[365usize, 5_000usize] {
        let spec = build_spec("line", n, 4);
        group.bench_function(format!("line_{n}x4"), |b| {
            b.iter(|| black_box(adapt(black_box(&spec))));
        });
    }
    group.finish();
}

fn bench_render_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::light();
    let viewport = Viewport::new(800, 500);
    for kind in ["bar", "area", "doughnut"] {
        let spec = build_spec(kind, 365, 3);
        group.bench_function(kind, |b| {
            b.iter(|| {
                let scene = layout(&adapt(&spec), &viewport, &theme);
                black_box(to_svg(&scene))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adapt, bench_render_svg);
criterion_main!(benches);
