//! Error types for board operations.
//!
//! Every error here is recoverable: the position is left exactly as it was
//! before the failing call.

use std::fmt;

use super::types::{Side, Square};

/// Error type for coordinate resolution failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index does not address one of the 64 squares
    OutOfBounds { index: usize },
    /// String is neither an index nor file a-h followed by rank 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move application and reversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Origin or destination could not be resolved
    InvalidSquare(SquareError),
    /// Nothing stands on the origin square
    EmptySquare { square: Square },
    /// The piece on the origin belongs to the side not on move
    WrongSide { square: Square, to_move: Side },
    /// Destination is not among the piece's legal destinations
    IllegalDestination { from: Square, to: Square },
    /// Undo requested with no applied moves
    NoHistory,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSquare(err) => write!(f, "{err}"),
            MoveError::EmptySquare { square } => write!(f, "Square {square} is empty"),
            MoveError::WrongSide { square, to_move } => {
                write!(f, "Piece on {square} does not belong to {to_move}, who is to move")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::NoHistory => write!(f, "No moves to undo"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::InvalidSquare(err)
    }
}

/// Error type for search and move selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no pseudo-legal move at all
    NoLegalMoves { side: Side },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves { side } => write!(f, "{side} has no legal moves"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Error type for the 64-token startup layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout must have exactly 64 tokens
    WrongLength { found: usize },
    /// Token is not blank and not a piece letter
    InvalidToken { index: usize, token: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongLength { found } => {
                write!(f, "Layout must have 64 tokens, found {found}")
            }
            LayoutError::InvalidToken { index, token } => {
                write!(f, "Invalid layout token '{token}' at index {index}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
