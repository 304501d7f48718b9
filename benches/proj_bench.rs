use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nell_hammer::proj::ellipsoid::UNIT_SPHERE;
use nell_hammer::proj::pipeline::Pipeline;
use nell_hammer::{NellHammer, Projection};

fn make_grid(n: usize) -> Vec<(f64, f64)> {
    let mut coords = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let lon = -3.1 + 6.2 * (i as f64) / (n as f64 - 1.0);
            let lat = -1.3 + 2.6 * (j as f64) / (n as f64 - 1.0);
            coords.push((lon, lat));
        }
    }
    coords
}

fn bench_forward(c: &mut Criterion) {
    let proj = NellHammer::unit();
    c.bench_function("forward_single", |b| {
        b.iter(|| black_box(proj.forward(black_box(1.1), black_box(0.7)).unwrap()));
    });
}

fn bench_inverse(c: &mut Criterion) {
    let proj = NellHammer::unit();
    let (x_eq, y_eq) = proj.forward(1.1, 0.2).unwrap();
    let (x_hi, y_hi) = proj.forward(1.1, 1.45).unwrap();

    // Near the equator the Newton solve converges in a couple of steps.
    c.bench_function("inverse_low_latitude", |b| {
        b.iter(|| black_box(proj.inverse(black_box(x_eq), black_box(y_eq)).unwrap()));
    });

    // High latitudes take more iterations.
    c.bench_function("inverse_high_latitude", |b| {
        b.iter(|| black_box(proj.inverse(black_box(x_hi), black_box(y_hi)).unwrap()));
    });

    // Unreachable target: full 9-iteration budget plus the pole clamp.
    c.bench_function("inverse_pole_clamp", |b| {
        b.iter(|| black_box(proj.inverse(black_box(3.0), black_box(10.0)).unwrap()));
    });
}

fn bench_batch_roundtrip(c: &mut Criterion) {
    let pipe = Pipeline::new("nell_h", UNIT_SPHERE).unwrap();
    let sizes = [64, 256];
    for &n in &sizes {
        let grid: Vec<(f64, f64)> = make_grid(n)
            .into_iter()
            .map(|(lon, lat)| (lon.to_degrees(), lat.to_degrees()))
            .collect();
        c.bench_function(&format!("roundtrip_batch_{n}x{n}"), |b| {
            b.iter(|| {
                let mut coords = grid.clone();
                pipe.project_batch(&mut coords).unwrap();
                pipe.unproject_batch(&mut coords).unwrap();
                black_box(coords)
            });
        });
    }
}

criterion_group!(benches, bench_forward, bench_inverse, bench_batch_roundtrip);
criterion_main!(benches);
