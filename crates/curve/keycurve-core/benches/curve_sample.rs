use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keycurve_core::{Curve, Keyframe, TangentMode};

fn build_curve(keys: usize) -> Curve {
    let mut curve = Curve::with_capacity(keys);
    for i in 0..keys {
        let p = i as f32;
        let key = if i % 7 == 3 {
            Keyframe::step(p, (p * 0.37).sin())
        } else {
            Keyframe::new(p, (p * 0.37).sin())
        };
        curve.insert(key).expect("finite key");
    }
    curve.derive_tangents(TangentMode::Smooth);
    curve
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for keys in [8usize, 128, 4096] {
        let curve = build_curve(keys);
        let span = (keys - 1) as f32;
        group.bench_with_input(BenchmarkId::from_parameter(keys), &curve, |b, curve| {
            let mut t = 0.0_f32;
            b.iter(|| {
                t = (t + 0.013) % span;
                black_box(curve.evaluate(black_box(t)).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_reverse_1024", |b| {
        b.iter(|| {
            let mut curve = Curve::with_capacity(1024);
            for i in (0..1024).rev() {
                curve.insert(Keyframe::new(i as f32, 0.0)).unwrap();
            }
            black_box(curve.len())
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_insert);
criterion_main!(benches);
