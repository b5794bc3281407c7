//! Benchmarks for the laser routing solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lazor::{simulate, Level};

const MIXED: &str = include_str!("../levels/mixed_3x3.bff");
const UNREACHABLE: &str = include_str!("../levels/tiny_unreachable.bff");

/// Benchmark solving a level with one block of each kind.
fn bench_solve(c: &mut Criterion) {
    let level = Level::parse(MIXED).expect("bundled level parses");

    c.bench_function("solve_mixed_3x3", |b| b.iter(|| black_box(&level).solve()));
}

/// Benchmark exhausting the search space of an unsolvable level.
fn bench_exhaust(c: &mut Criterion) {
    let level = Level::parse(UNREACHABLE).expect("bundled level parses");

    c.bench_function("exhaust_tiny", |b| b.iter(|| black_box(&level).solve()));
}

/// Benchmark tracing beams across a solved board.
fn bench_simulate(c: &mut Criterion) {
    let level = Level::parse(MIXED).expect("bundled level parses");
    let board = level.solve().expect("bundled level is solvable");

    c.bench_function("simulate_mixed_3x3", |b| {
        b.iter(|| simulate(black_box(&level.lasers), black_box(&board)))
    });
}

/// Benchmark parsing a level description.
fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_level", |b| b.iter(|| Level::parse(black_box(MIXED))));
}

criterion_group!(benches, bench_solve, bench_exhaust, bench_simulate, bench_parse);
criterion_main!(benches);
