use once_cell::sync::Lazy;

use super::{PieceKind, Side, Square};

fn step_targets(deltas: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|index| {
        let from = Square::from_index_unchecked(index);
        deltas
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    })
}

/// On-board knight destinations per square, in jump order
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(PieceKind::Knight.movement().directions));

/// On-board king destinations per square, in direction order
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(PieceKind::King.movement().directions));

/// Squares a pawn of each side attacks diagonally, indexed by side then square
pub(crate) static PAWN_ATTACKS: Lazy<[[Vec<Square>; 64]; 2]> = Lazy::new(|| {
    Side::BOTH.map(|side| {
        let dr = side.pawn_direction();
        step_targets(&[(-1, dr), (1, dr)])
    })
});
