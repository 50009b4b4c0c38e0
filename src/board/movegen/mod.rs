//! Legal move generation.
//!
//! Destinations are pseudo-legal: they respect movement geometry and
//! occupancy but do not check whether the mover's own King is left attacked.
//! `is_in_check` is the hook for callers that want to filter further.

mod attacks;
mod pawns;
mod sliders;
mod steppers;

use super::{Move, PieceKind, Position, Reach, Square};

impl Position {
    /// Destinations reachable by the piece on `from`, in a stable order.
    ///
    /// The piece moves for its own side regardless of whose turn it is. An
    /// empty origin has no destinations.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let movement = piece.kind.movement();
        if movement.pawn {
            return self.pawn_destinations(from, piece.side);
        }
        match movement.reach {
            Reach::Step => self.step_destinations(from, piece),
            Reach::Slide => self.slide_destinations(from, piece.side, movement.directions),
        }
    }

    /// Every move available to the side to move, origins in scan order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, _) in self.pieces_of(self.side_to_move) {
            for to in self.legal_destinations(from) {
                moves.push(self.create_move(from, to));
            }
        }
        moves
    }

    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.pieces_of(self.side_to_move)
            .any(|(from, _)| !self.legal_destinations(from).is_empty())
    }

    /// Build the history record for moving `from` to `to` in this position.
    pub(crate) fn create_move(&self, from: Square, to: Square) -> Move {
        let mut mv = Move::new(from, to, self.piece_at(to));
        if let Some(piece) = self.piece_at(from) {
            if piece.kind.movement().pawn && to.rank() == piece.side.promotion_rank() {
                mv.promotion = Some(PieceKind::Queen);
            }
        }
        mv
    }
}
