//! Performance benchmarks for pointer hit-testing
//!
//! Measures ray casting and dispatch cost as the number of registered
//! regions grows, plus the per-frame scene render.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::{backend::TestBackend, Terminal};
use signboard::dispatch::{dispatch, OverlayProbe, PointerEvent, Viewport};
use signboard::scene::{Ndc, RayCaster, RegionRegistry, SignFace, Signboard};
use signboard::ui::render_scene;

/// A grid of `count` small overlapping faces at varying depths.
fn build_registry(count: usize) -> RegionRegistry {
    let mut registry = RegionRegistry::new();
    let side = (count as f32).sqrt().ceil() as usize;
    let step = 2.0 / side as f32;
    for i in 0..count {
        let col = (i % side) as f32;
        let row = (i / side) as f32;
        let min = Ndc::new(-1.0 + col * step, -1.0 + row * step);
        // Faces are 1.5 cells wide so neighbours overlap
        let max = Ndc::new(min.x + step * 1.5, min.y + step * 1.5);
        let face = SignFace::new(min, max, (i % 7) as f32 + 1.0);
        registry
            .register(format!("region_{}", i), face)
            .expect("unique ids");
    }
    registry
}

/// Benchmark a single ray cast across registries of different sizes
fn bench_ray_cast(c: &mut Criterion) {
    let mut group = c.benchmark_group("ray_cast");

    for size in [5, 50, 500, 5000].iter() {
        let registry = build_registry(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, registry| {
            b.iter(|| black_box(registry.cast(black_box(Ndc::new(0.1, -0.2)))));
        });
    }

    group.finish();
}

/// Benchmark the full dispatch decision on the default signboard
fn bench_dispatch_signboard(c: &mut Criterion) {
    let scene = Signboard::default().registry().expect("default scene");
    let viewport = Viewport::new(200, 60);

    c.bench_function("dispatch_signboard_sweep", |b| {
        b.iter(|| {
            let mut opened = 0usize;
            for y in (0..viewport.height).step_by(3) {
                for x in (0..viewport.width).step_by(5) {
                    let event = PointerEvent::new(x, y, viewport);
                    if dispatch(&event, OverlayProbe::Closed, &scene).is_some() {
                        opened += 1;
                    }
                }
            }
            black_box(opened)
        });
    });
}

/// Benchmark drawing the scene into an off-screen buffer
fn bench_render_scene(c: &mut Criterion) {
    let board = Signboard::default();
    let mut terminal = Terminal::new(TestBackend::new(200, 60)).expect("test backend");

    c.bench_function("render_scene_200x60", |b| {
        b.iter(|| {
            terminal
                .draw(|f| render_scene(f, f.area(), black_box(&board)))
                .expect("draw");
        });
    });
}

criterion_group!(
    benches,
    bench_ray_cast,
    bench_dispatch_signboard,
    bench_render_scene
);
criterion_main!(benches);
