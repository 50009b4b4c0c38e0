use super::error::SquareError;
use super::layout::STANDARD_LAYOUT;
use super::{IntoSquare, Move, Piece, PieceKind, Side, Square};

/// A square together with whatever stands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub piece: Option<Piece>,
}

/// Full occupancy plus side to move; identifies a position for memoization
/// without regard to how it was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    squares: [Option<Piece>; 64],
    side_to_move: Side,
}

/// One board snapshot: occupancy, the side to move and the applied moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Side,
    pub(crate) history: Vec<Move>,
}

impl Position {
    /// Standard starting position, White to move
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty(Side::White);
        for (index, token) in STANDARD_LAYOUT.iter().enumerate() {
            position.squares[index] = token.chars().next().and_then(Piece::from_char);
        }
        position
    }

    pub(crate) fn empty(side_to_move: Side) -> Self {
        Position {
            squares: [None; 64],
            side_to_move,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Resolve a coordinate (square, index or algebraic string) to its
    /// current placement.
    pub fn square_at(&self, coordinate: impl IntoSquare) -> Result<Placement, SquareError> {
        let square = coordinate.into_square()?;
        Ok(Placement {
            square,
            piece: self.piece_at(square),
        })
    }

    /// All 64 slots in scan order
    #[must_use]
    pub fn occupancy(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    /// Applied moves, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Pieces removed from the board, in the order they were captured
    pub fn captured_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.history.iter().filter_map(|m| m.captured)
    }

    /// Squares holding a piece of `kind` owned by `side`, in scan order
    #[must_use]
    pub fn find_squares(&self, kind: PieceKind, side: Side) -> Vec<Square> {
        let target = Piece::new(kind, side);
        Square::all()
            .filter(|sq| self.piece_at(*sq) == Some(target))
            .collect()
    }

    #[must_use]
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.find_squares(PieceKind::King, side).into_iter().next()
    }

    /// Squares occupied by `side`, in scan order
    pub(crate) fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.side == side => Some((sq, piece)),
            _ => None,
        })
    }

    /// True when occupancy and side to move match, whatever the histories.
    #[must_use]
    pub fn same_state(&self, other: &Position) -> bool {
        self.squares == other.squares && self.side_to_move == other.side_to_move
    }

    pub(crate) fn state_key(&self) -> StateKey {
        StateKey {
            squares: self.squares,
            side_to_move: self.side_to_move,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
