//! Move records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// One applied ply: enough information to undo it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Piece standing on `to` before the move
    pub captured: Option<Piece>,
    /// Kind the moving pawn became on reaching the far rank
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, captured: Option<Piece>) -> Self {
        Move {
            from,
            to,
            captured,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "" };
        write!(f, "{}{}{}", self.from, sep, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char())?;
        }
        Ok(())
    }
}
