//! Benchmarks for generation, projection and full-frame rendering

use blochq::{BlochVector, RenderConfig, SphereRenderer, ZaunerSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_generate_and_project(c: &mut Criterion) {
    c.bench_function("generate_and_project", |b| {
        b.iter(|| {
            let set = ZaunerSet::generate();
            let points: Vec<BlochVector> = set.iter().map(BlochVector::from_state).collect();
            black_box(points)
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let set = ZaunerSet::generate();
    let renderer = SphereRenderer::new();

    c.bench_function("render_frame_default", |b| {
        b.iter(|| black_box(renderer.render(black_box(&set)).unwrap()))
    });
}

fn bench_render_resolutions(c: &mut Criterion) {
    let set = ZaunerSet::generate();
    let mut group = c.benchmark_group("render_frame_wireframe_resolution");

    for (meridians, parallels) in [(10, 5), (20, 10), (40, 20)] {
        let config = RenderConfig::builder()
            .sphere_resolution(meridians, parallels)
            .build();
        let renderer = SphereRenderer::with_config(config);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", meridians, parallels)),
            &set,
            |b, set| b.iter(|| black_box(renderer.render(set).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_and_project,
    bench_render_frame,
    bench_render_resolutions
);
criterion_main!(benches);
