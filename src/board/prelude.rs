//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//!
//! let engine = Engine::new();
//! let best = engine.evaluate(&Position::new()).unwrap();
//! assert_eq!(best.evaluation, 0);
//! ```

pub use super::{
    Engine, EvaluatedPosition, Material, Move, MoveError, Piece, PieceKind, Position,
    PositionBuilder, Scorer, SearchError, SearchParams, Side, Square, SquareError,
};
