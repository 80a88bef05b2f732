use criterion::{criterion_group, criterion_main, Criterion};
use esolid_core::RngHandle;
use esolid_lattice::{sample, Lattice};

fn bench_exchange(c: &mut Criterion) {
    c.bench_function("exchange_sweep_400", |b| {
        let mut lattice = Lattice::new(400, 10).unwrap();
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| {
            lattice.exchange(400, &mut rng);
        })
    });

    c.bench_function("sample_equilibrated_400", |b| {
        let mut lattice = Lattice::new(400, 10).unwrap();
        let mut rng = RngHandle::from_seed(42);
        lattice.exchange(100 * lattice.count(), &mut rng);
        b.iter(|| sample(&lattice).unwrap())
    });
}

criterion_group!(benches, bench_exchange);
criterion_main!(benches);
