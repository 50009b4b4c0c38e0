//! Engine tests through the public API.

use chess_core::board::{Engine, Material, PieceKind, Position, PositionBuilder, SearchParams, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Engine takes a free piece when one is hanging
#[test]
fn captures_free_piece() {
    let position = PositionBuilder::new()
        .piece("e1", PieceKind::King, Side::White)
        .piece("e8", PieceKind::King, Side::Black)
        .piece("c4", PieceKind::Bishop, Side::White)
        .piece("f7", PieceKind::Rook, Side::Black)
        .build()
        .unwrap();

    let best = Engine::new().evaluate(&position).unwrap();
    assert_eq!(best.mv.to_string(), "c4xf7");
    assert_eq!(best.position.captured_pieces().count(), 1);
}

/// Taking the King outweighs any other material
#[test]
fn prefers_king_capture() {
    let position = PositionBuilder::new()
        .piece("a1", PieceKind::King, Side::White)
        .piece("d1", PieceKind::Rook, Side::White)
        .piece("d8", PieceKind::King, Side::Black)
        .piece("h1", PieceKind::Queen, Side::Black)
        .build()
        .unwrap();

    let best = Engine::new().evaluate(&position).unwrap();
    assert_eq!(best.mv.to_string(), "d1xd8");
}

/// Black's evaluation is from Black's point of view
#[test]
fn evaluation_is_for_side_to_move() {
    let position = PositionBuilder::new()
        .piece("e1", PieceKind::King, Side::White)
        .piece("e8", PieceKind::King, Side::Black)
        .piece("a8", PieceKind::Rook, Side::Black)
        .piece("a2", PieceKind::Knight, Side::White)
        .side_to_move(Side::Black)
        .build()
        .unwrap();

    let best = Engine::new().evaluate(&position).unwrap();
    assert_eq!(best.mv.to_string(), "a8xa2");
    assert_eq!(best.evaluation, 500);
}

/// Deeper search agrees with one ply when nothing is at stake
#[test]
fn depth_does_not_change_quiet_start() {
    let deep = Engine::with_scorer(Material, SearchParams::with_depth(2));
    let best = deep.evaluate(&Position::new()).unwrap();
    assert_eq!(best.evaluation, 0);
    assert_eq!(best.mv.to_string(), "a2a3");
}

/// A self-play game driven by seeded random moves replays identically
#[test]
fn seeded_self_play_is_reproducible() {
    let play = |seed: u64| {
        let engine = Engine::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Position::new();
        for _ in 0..30 {
            let Ok(mv) = engine.choose_random_move(&position, &mut rng) else {
                break;
            };
            position.apply_move(mv.from, mv.to).unwrap();
        }
        position
    };
    assert_eq!(play(11), play(11));
}
