//! Criterion micro-benchmarks for A* planning.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wayfind_bench::{open_profile, serpentine_endpoints, serpentine_profile};
use wayfind_core::Cell;
use wayfind_grid::Grid;
use wayfind_search::{plan, SearchConfig};
use wayfind_test_utils::random_grid;

/// Corner to corner on an open grid, both connectivities.
fn bench_open_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_grid");
    for size in [64usize, 256] {
        let grid = open_profile(size);
        let goal = Cell::new(size as i32 - 1, size as i32 - 1);
        for (name, config) in [
            ("four", SearchConfig::four_connected()),
            ("eight", SearchConfig::eight_connected()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &grid, |b, grid| {
                b.iter(|| black_box(plan(grid, Cell::new(0, 0), goal, &config)));
            });
        }
    }
    group.finish();
}

/// Long forced detour: the open set sweeps most of the grid.
fn bench_serpentine(c: &mut Criterion) {
    let size = 128;
    let grid = serpentine_profile(size);
    let (start, goal) = serpentine_endpoints(size);
    let config = SearchConfig::default();
    c.bench_function("serpentine_128", |b| {
        b.iter(|| black_box(plan(&grid, start, goal, &config)));
    });
}

/// Random 25% obstacle field with free corners. The goal may still be
/// walled off, in which case this measures an exhaustive search.
fn bench_random_field(c: &mut Criterion) {
    let mut occupancy = random_grid(200, 200, 0.25, 42).occupancy().to_vec();
    occupancy[0] = 0;
    occupancy[200 * 200 - 1] = 0;
    let grid = Grid::new(200, 200, occupancy).unwrap();
    let config = SearchConfig::default();
    let start = Cell::new(0, 0);
    let goal = Cell::new(199, 199);
    c.bench_function("random_200_density_25", |b| {
        b.iter(|| black_box(plan(&grid, start, goal, &config)));
    });
}

criterion_group!(benches, bench_open_grid, bench_serpentine, bench_random_field);
criterion_main!(benches);
