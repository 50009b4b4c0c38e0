pub mod board;

pub use board::{Engine, Move, Piece, PieceKind, Position, Side, Square};
