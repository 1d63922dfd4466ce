use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ybfiber::{CrossSectionKind, Yb3Fiber};

fn bench_scalar_lookup(c: &mut Criterion) {
    let fiber = Yb3Fiber::new();
    let wavelengths = [905.0, 940.0, 976.0, 1030.0, 1100.0];

    c.bench_function("emission_scalar", |b| {
        b.iter(|| {
            for &wl in &wavelengths {
                black_box(fiber.emission(black_box(wl)).unwrap());
            }
        });
    });
}

fn bench_vector_sweep(c: &mut Criterion) {
    let fiber = Yb3Fiber::new();
    let sweep: Vec<f64> = (0..200).map(|i| 850.0 + i as f64 * 1.65).collect();

    c.bench_function("emission_vector_sweep", |b| {
        b.iter(|| {
            black_box(
                fiber
                    .cross_section(black_box(&sweep), black_box(CrossSectionKind::Emission))
                    .unwrap(),
            );
        });
    });

    c.bench_function("absorption_vector_sweep", |b| {
        b.iter(|| {
            black_box(fiber.absorption_spectrum(black_box(&sweep)).unwrap());
        });
    });
}

criterion_group!(benches, bench_scalar_lookup, bench_vector_sweep);
criterion_main!(benches);
