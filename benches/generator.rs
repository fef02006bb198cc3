//! Benchmarks for the Rule 30 generator.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use rule30_prng::compute::AutomatonState;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("automaton_step");

    for size in [32, 64, 128, 256, 1024] {
        let mut state = AutomatonState::initialize(12345, size).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_columns", size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut state).step();
                });
            },
        );
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for bits in [8, 32, 64] {
        let mut state = AutomatonState::initialize(777, 64).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_bits", bits)),
            &bits,
            |b, &bits| {
                b.iter(|| black_box(state.generate(black_box(bits))));
            },
        );
    }

    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");

    for size in [64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| AutomatonState::initialize(black_box(777), size).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_generate, bench_initialize);
criterion_main!(benches);
