use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pake25519::Curve25519;
use rand_core::{OsRng, RngCore};

fn random_scalar() -> [u8; 32] {
    let mut scalar = [0u8; 32];
    OsRng.fill_bytes(&mut scalar);
    scalar
}

pub fn curve25519(c: &mut Criterion) {
    let curve = Curve25519;
    let mut group = c.benchmark_group("Curve25519");

    group.bench_function("fixed-base scalar multiplication", |b| {
        b.iter_batched(
            random_scalar,
            |scalar| curve.mul_by_generator(&scalar),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("scalar multiplication", |b| {
        b.iter_batched(
            || {
                let point = curve.mul_by_generator(&random_scalar()).unwrap();
                (point, random_scalar())
            },
            |(point, scalar)| curve.mul(&point, &scalar),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("point addition", |b| {
        b.iter_batched(
            || {
                let p1 = curve.mul_by_generator(&random_scalar()).unwrap();
                let p2 = curve.mul_by_generator(&random_scalar()).unwrap();
                (p1, p2)
            },
            |(p1, p2)| curve.add(&p1, &p2),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("membership test", |b| {
        b.iter_batched(
            || curve.mul_by_generator(&random_scalar()).unwrap(),
            |point| curve.is_on_curve(&point),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, curve25519);
criterion_main!(benches);
