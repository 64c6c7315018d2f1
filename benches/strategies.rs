//! Solve times per strategy on seeded random-walk scrambles

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fifteen_puzzle::{solve, Board, SearchConfig, Strategy};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

/// Uninformed searches on shallow scrambles
fn bench_uninformed(c: &mut Criterion) {
    let mut group = c.benchmark_group("uninformed");
    let config = SearchConfig::default();

    for moves in [6, 10] {
        let start = Board::scrambled(&mut StdRng::seed_from_u64(moves as u64), moves);
        for strategy in [Strategy::Bfs, Strategy::Ids] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), moves),
                &start,
                |b, &start| b.iter(|| solve(strategy, black_box(start), &config)),
            );
        }
    }

    group.finish();
}

/// Heuristic searches on deeper scrambles
fn bench_informed(c: &mut Criterion) {
    let mut group = c.benchmark_group("informed");
    let config = SearchConfig::default();

    for moves in [20, 40] {
        let start = Board::scrambled(&mut StdRng::seed_from_u64(moves as u64), moves);
        for strategy in [Strategy::AStar, Strategy::IdaStar] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), moves),
                &start,
                |b, &start| b.iter(|| solve(strategy, black_box(start), &config)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_uninformed, bench_informed);
criterion_main!(benches);
