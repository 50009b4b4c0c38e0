use std::borrow::Cow;

use super::super::tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::{Piece, PieceKind, Position, Square};

impl Position {
    /// One hop per movement direction onto an empty or enemy square.
    pub(crate) fn step_destinations(&self, from: Square, piece: Piece) -> Vec<Square> {
        let targets: Cow<'_, [Square]> = match piece.kind {
            PieceKind::Knight => Cow::Borrowed(&KNIGHT_TARGETS[from.index()]),
            PieceKind::King => Cow::Borrowed(&KING_TARGETS[from.index()]),
            // Untabled kinds step along their own directions
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen | PieceKind::Pawn => piece
                .kind
                .movement()
                .directions
                .iter()
                .filter_map(|&(df, dr)| from.offset(df, dr))
                .collect(),
        };
        targets
            .iter()
            .copied()
            .filter(|&to| !matches!(self.piece_at(to), Some(other) if other.side == piece.side))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Piece, PieceKind, Position, Side, Square};

    #[test]
    fn test_step_targets_follow_movement_directions() {
        let position = Position::empty(Side::White);
        for kind in [PieceKind::Knight, PieceKind::King] {
            let piece = Piece::new(kind, Side::White);
            for from in Square::all() {
                let expected: Vec<Square> = kind
                    .movement()
                    .directions
                    .iter()
                    .filter_map(|&(df, dr)| from.offset(df, dr))
                    .collect();
                assert_eq!(position.step_destinations(from, piece), expected, "{kind:?} on {from}");
            }
        }
    }
}
