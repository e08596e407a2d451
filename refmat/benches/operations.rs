use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use refmat::{sin, Array2D};

criterion_main!(benches);
criterion_group!(
    benches,
    compound_add,
    free_add,
    scalar_broadcast,
    reductions,
    apply_sin
);

const SIZE: usize = 256;

fn filled(value: f64) -> Array2D<f64> {
    let mut array = Array2D::new(SIZE, SIZE);
    array.fill(value);
    array
}

fn group(c: &mut Criterion, name: &str, mut f: impl FnMut(&mut criterion::Bencher)) {
    c.benchmark_group("benches")
        .measurement_time(Duration::from_secs(10))
        .bench_function(name, |b| f(b));
}

fn compound_add(c: &mut Criterion) {
    let mut a = filled(1.0);
    let b = filled(2.0);
    group(c, "compound_add", |bencher| {
        bencher.iter(|| {
            a += black_box(&b);
        })
    });
}

fn free_add(c: &mut Criterion) {
    let a = filled(1.0);
    let b = filled(2.0);
    group(c, "free_add", |bencher| {
        bencher.iter(|| black_box(&a) + black_box(&b))
    });
}

fn scalar_broadcast(c: &mut Criterion) {
    let mut a = filled(0.0);
    group(c, "scalar_broadcast", |bencher| {
        bencher.iter(|| a.fill(black_box(3.0)))
    });
}

fn reductions(c: &mut Criterion) {
    let a = filled(-0.5);
    group(c, "reductions", |bencher| {
        bencher.iter(|| {
            let a = black_box(&a);
            (a.sum(), a.norm1(), a.norm2(), a.norminf())
        })
    });
}

fn apply_sin(c: &mut Criterion) {
    let a = filled(0.25);
    group(c, "apply_sin", |bencher| bencher.iter(|| sin(black_box(&a))));
}
