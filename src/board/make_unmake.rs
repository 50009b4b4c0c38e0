use log::debug;

use super::error::MoveError;
use super::{IntoSquare, Move, Piece, PieceKind, Position};

impl Position {
    /// Move the piece on `origin` to `destination` for the side to move.
    ///
    /// Returns the captured piece, if any. On error the position is
    /// untouched.
    pub fn apply_move(
        &mut self,
        origin: impl IntoSquare,
        destination: impl IntoSquare,
    ) -> Result<Option<Piece>, MoveError> {
        let from = origin.into_square()?;
        let to = destination.into_square()?;

        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.side != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                to_move: self.side_to_move,
            });
        }
        if !self.legal_destinations(from).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let mv = self.create_move(from, to);
        self.make_move(mv);
        debug!("{} {} played {}", piece.side, piece.kind, mv);
        Ok(mv.captured)
    }

    /// Take back the most recent move.
    pub fn undo_last_move(&mut self) -> Result<Move, MoveError> {
        let mv = self.unmake_move().ok_or(MoveError::NoHistory)?;
        debug!("took back {}", mv);
        Ok(mv)
    }

    /// Apply a move already known to be legal here. The record must come from
    /// `create_move` on this exact position.
    pub(crate) fn make_move(&mut self, mv: Move) {
        let moving = self.squares[mv.from.index()].take();
        let placed = match (moving, mv.promotion) {
            (Some(piece), Some(kind)) => Some(Piece::new(kind, piece.side)),
            _ => moving,
        };
        self.squares[mv.to.index()] = placed;
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Invert the last `make_move`, returning its record.
    pub(crate) fn unmake_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        let moved = self.squares[mv.to.index()].take();
        let restored = match (moved, mv.promotion) {
            (Some(piece), Some(_)) => Some(Piece::new(PieceKind::Pawn, piece.side)),
            _ => moved,
        };
        self.squares[mv.from.index()] = restored;
        self.squares[mv.to.index()] = mv.captured;
        self.side_to_move = self.side_to_move.opponent();
        Some(mv)
    }
}
