//! Square coordinates.
//!
//! Squares are indexed 0..64 in the order a8, b8, ..., h8, a7, ..., h1. That
//! is the order of the startup token sequence and the canonical scan order for
//! every board query.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A board coordinate, guaranteed to be in `0..64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    /// Create a square from its index with bounds checking
    pub fn new(index: usize) -> Result<Self, SquareError> {
        if index < Self::COUNT {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::OutOfBounds { index })
        }
    }

    /// Create a square from file (0 = a) and rank (0 = rank 1)
    #[must_use]
    pub fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square((7 - rank) * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: usize) -> Self {
        Square(index as u8)
    }

    /// All squares in scan order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File index (0 = a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank index (0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        7 - self.0 / 8
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    /// Positive `dr` moves toward rank 8.
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Square::from_coords(file as u8, rank as u8)
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Accepts a zero-based index ("12") or algebraic notation ("e2").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            // An index too long for usize is a notation error
            let index = s.parse::<usize>().map_err(|_| invalid())?;
            return Square::new(index);
        }

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'1',
            _ => return Err(invalid()),
        };
        Square::from_coords(file, rank).ok_or_else(invalid)
    }
}

/// Anything that can name a square: a `Square`, an index or a coordinate
/// string.
pub trait IntoSquare {
    fn into_square(self) -> Result<Square, SquareError>;
}

impl IntoSquare for Square {
    fn into_square(self) -> Result<Square, SquareError> {
        Ok(self)
    }
}

impl IntoSquare for usize {
    fn into_square(self) -> Result<Square, SquareError> {
        Square::new(self)
    }
}

impl IntoSquare for &str {
    fn into_square(self) -> Result<Square, SquareError> {
        self.parse()
    }
}

impl IntoSquare for &String {
    fn into_square(self) -> Result<Square, SquareError> {
        self.parse()
    }
}
