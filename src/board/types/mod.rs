//! Core board types.
//!
//! - `Side`, `PieceKind`, `Piece` and the `Movement` capability descriptor
//! - `Square` - board coordinate in scan order (a8 = 0, h1 = 63)
//! - `Move` - history record of one applied ply

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Movement, Piece, PieceKind, Reach, Side};
pub use square::{IntoSquare, Square};

pub(crate) use piece::{DIAGONAL, ORTHOGONAL};
