use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lifelike::{CellKey, Grid, KeyScheme, PairedKey, Rule};

const SEED: u64 = 42;
const FIELD_SIZE: u32 = 256;
const DENSITY: f64 = 0.3;

fn advance<K: KeyScheme>(c: &mut Criterion) {
    let mut grid = Grid::<K>::new();
    grid.randomize_seeded(FIELD_SIZE, DENSITY, Some(SEED)).unwrap();
    let rule = Rule::conway();

    c.bench_function(&format!("advance_generation_{}", K::NAME), |b| {
        b.iter_batched_ref(
            || grid.clone(),
            |g| g.advance_generation(&rule),
            BatchSize::LargeInput,
        )
    });
}

fn randomize(c: &mut Criterion) {
    let mut grid = Grid::<PairedKey>::new();
    c.bench_function("randomize", |b| {
        b.iter(|| grid.randomize_seeded(FIELD_SIZE, DENSITY, Some(SEED)).unwrap())
    });
}

criterion_group!(benches, advance<PairedKey>, advance<CellKey>, randomize);
criterion_main!(benches);
