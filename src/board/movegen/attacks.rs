use super::super::tables::{KING_TARGETS, KNIGHT_TARGETS, PAWN_ATTACKS};
use super::super::types::{DIAGONAL, ORTHOGONAL};
use super::super::{Piece, PieceKind, Position, Side, Square};

impl Position {
    /// Returns true if any piece of `attacker` could capture on `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Side) -> bool {
        let holds = |sq: Square, kind: PieceKind| self.piece_at(sq) == Some(Piece::new(kind, attacker));

        // A pawn of `attacker` hits `square` from where an opposing pawn on
        // `square` would itself attack.
        if PAWN_ATTACKS[attacker.opponent().index()][square.index()]
            .iter()
            .any(|&sq| holds(sq, PieceKind::Pawn))
        {
            return true;
        }
        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| holds(sq, PieceKind::Knight))
        {
            return true;
        }
        if KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| holds(sq, PieceKind::King))
        {
            return true;
        }

        self.slider_hits(square, attacker, &ORTHOGONAL, PieceKind::Rook)
            || self.slider_hits(square, attacker, &DIAGONAL, PieceKind::Bishop)
    }

    fn slider_hits(
        &self,
        square: Square,
        attacker: Side,
        directions: &[(i8, i8)],
        kind: PieceKind,
    ) -> bool {
        for &(df, dr) in directions {
            let mut current = square;
            while let Some(next) = current.offset(df, dr) {
                if let Some(piece) = self.piece_at(next) {
                    if piece.side == attacker
                        && (piece.kind == kind || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    /// Returns true if `side` has a King and it is attacked.
    #[must_use]
    pub fn is_in_check(&self, side: Side) -> bool {
        self.king_square(side)
            .is_some_and(|king| self.is_square_attacked(king, side.opponent()))
    }
}
