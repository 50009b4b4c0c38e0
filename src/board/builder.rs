//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing a layout.
//!
//! # Example
//! ```
//! use chess_core::board::{PieceKind, PositionBuilder, Side};
//!
//! let position = PositionBuilder::new()
//!     .piece("e1", PieceKind::King, Side::White)
//!     .piece("e8", PieceKind::King, Side::Black)
//!     .piece("a2", PieceKind::Pawn, Side::White)
//!     .side_to_move(Side::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.legal_moves().len(), 7);
//! ```

use super::error::SquareError;
use super::{Piece, PieceKind, Position, Side, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(String, Piece)>,
    side_to_move: Side,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board with White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Side::White,
        }
    }

    /// Place a piece. Later placements on the same square win.
    #[must_use]
    pub fn piece(mut self, square: &str, kind: PieceKind, side: Side) -> Self {
        self.pieces
            .push((square.to_string(), Piece::new(kind, side)));
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// Build the position, failing on the first unresolvable square.
    pub fn build(self) -> Result<Position, SquareError> {
        let mut position = Position::empty(self.side_to_move);
        for (notation, piece) in self.pieces {
            let square: Square = notation.parse()?;
            position.squares[square.index()] = Some(piece);
        }
        Ok(position)
    }
}
