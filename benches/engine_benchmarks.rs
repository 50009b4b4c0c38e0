//! Benchmarks for move generation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::board::{Engine, Material, Position, SearchParams};

/// A middlegame reached by a fixed random playout
fn middlegame() -> Position {
    let engine = Engine::new();
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let mut position = Position::new();
    for _ in 0..24 {
        match engine.choose_random_move(&position, &mut rng) {
            Ok(mv) => {
                position.apply_move(mv.from, mv.to).unwrap();
            }
            Err(_) => break,
        }
    }
    position
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middle = middlegame();
    group.bench_function("middlegame", |b| b.iter(|| black_box(middle.legal_moves())));

    group.finish();
}

fn bench_apply_undo(c: &mut Criterion) {
    let mut position = Position::new();
    let moves = position.legal_moves();
    c.bench_function("apply_undo_all_start_moves", |b| {
        b.iter(|| {
            for mv in &moves {
                position.apply_move(mv.from, mv.to).unwrap();
                position.undo_last_move().unwrap();
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let middle = middlegame();
    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            let params = SearchParams {
                depth,
                node_budget: None,
                memo_capacity: 0,
            };
            let engine = Engine::with_scorer(Material, params);
            b.iter(|| engine.evaluate(black_box(&middle)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_apply_undo, bench_search);
criterion_main!(benches);
