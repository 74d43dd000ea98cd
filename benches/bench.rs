use criterion::{criterion_group, criterion_main, Criterion};
use torus_life::{Engine, Grid, ParallelEngine, SequentialEngine};

const N: usize = 1 << 9;
const SEED: u64 = 42;

fn bench_sequential(c: &mut Criterion) {
    let grid = Grid::random(N, Some(SEED)).unwrap();
    let mut next = grid.clone();
    c.bench_function("sequential", |b| {
        b.iter(|| SequentialEngine.step_into(&grid, &mut next))
    });
}

fn bench_parallel(c: &mut Criterion) {
    let grid = Grid::random(N, Some(SEED)).unwrap();
    let mut next = grid.clone();
    c.bench_function("parallel", |b| {
        b.iter(|| ParallelEngine.step_into(&grid, &mut next))
    });
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
