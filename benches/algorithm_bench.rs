//! Benchmarks for the ant colony.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use aco_tsp::config::Config;
use aco_tsp::construction::TourConstructor;
use aco_tsp::pheromone::PheromoneMatrix;
use aco_tsp::problem::{Node, Problem};
use aco_tsp::AntColony;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create a benchmark problem with nodes on a square grid.
fn create_benchmark_problem(size: usize) -> Problem {
    let grid_size = (size as f64).sqrt().ceil() as usize;
    let nodes = (0..size)
        .map(|i| {
            let row = i / grid_size;
            let col = i % grid_size;
            Node::new(col as f64 / grid_size as f64, row as f64 / grid_size as f64)
        })
        .collect();

    Problem::new(format!("BenchProblem_{}", size), nodes)
}

#[cfg(feature = "bench")]
fn benchmark_tour_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_construction");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let pheromones = PheromoneMatrix::new(size, 0.11);
            let constructor = TourConstructor::new(0.8, 7.5);
            let mut rng = ChaCha8Rng::seed_from_u64(1);

            b.iter(|| {
                constructor
                    .build(0, &problem.distances, &pheromones, &mut rng)
                    .unwrap()
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_colony_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("colony_run");
    group.sample_size(10);

    for size in [20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let config = Config::new()
                .with_iteration_count(20)
                .with_ant_count(20)
                .with_seed(7);

            b.iter(|| {
                let mut colony = AntColony::new(problem.clone(), config.clone()).unwrap();
                colony.run().unwrap().length
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(benches, benchmark_tour_construction, benchmark_colony_run);

#[cfg(feature = "bench")]
criterion_main!(benches);
