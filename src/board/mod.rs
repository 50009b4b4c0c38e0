//! Board representation and game logic.
//!
//! A `Position` holds 64 occupancy slots, the side to move and the history
//! of applied moves. Moves are generated pseudo-legally per piece kind and
//! every applied move can be taken back exactly.
//!
//! # Example
//! ```
//! use chess_core::board::{Position, Side};
//!
//! let mut position = Position::new();
//! assert_eq!(position.legal_moves().len(), 20);
//!
//! position.apply_move("e2", "e4").unwrap();
//! assert_eq!(position.side_to_move(), Side::Black);
//!
//! position.undo_last_move().unwrap();
//! assert_eq!(position, Position::new());
//! ```

mod builder;
mod error;
mod eval;
mod layout;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{LayoutError, MoveError, SearchError, SquareError};
pub use layout::STANDARD_LAYOUT;
pub use state::{Placement, Position};
pub use types::{IntoSquare, Move, Movement, Piece, PieceKind, Reach, Side, Square};

// Public API - search and scoring
pub use eval::{Material, Scorer};
pub use search::{Engine, EvaluatedPosition, SearchParams};
