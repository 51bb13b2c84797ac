//! Benchmarks for the Game of Life engine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use game_of_life::{
    compute::Engine,
    schema::{Pattern, Seed},
};

fn random_engine(rows: usize, cols: usize, density: f64) -> Engine {
    let mut engine = Engine::new(rows, cols).unwrap();
    let seed = Seed {
        pattern: Pattern::Random {
            density,
            seed: Some(42),
        },
    };
    seed.apply(&mut engine).unwrap();
    engine
}

fn bench_advance_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_generation");

    for size in [64, 128, 256, 512, 1024] {
        let mut engine = random_engine(size, size, 0.3);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut engine).advance_generation();
                });
            },
        );
    }

    group.finish();
}

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");

    for percent in [5, 30, 60] {
        let mut engine = random_engine(256, 256, percent as f64 / 100.0);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}%", percent)),
            &percent,
            |b, _| {
                b.iter(|| {
                    black_box(&mut engine).advance_generation();
                    black_box(engine.dirty_cells().len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_advance_generation, bench_density);
criterion_main!(benches);
