//! The 64-token startup layout.
//!
//! Tokens run a8..h8, a7..h7, ..., a1..h1. Uppercase letters are White,
//! lowercase are Black, and a blank or single space marks an empty square.

use super::error::LayoutError;
use super::{Piece, Position, Side};

/// Standard starting arrangement
pub const STANDARD_LAYOUT: [&str; 64] = [
    "r", "n", "b", "q", "k", "b", "n", "r", //
    "p", "p", "p", "p", "p", "p", "p", "p", //
    " ", " ", " ", " ", " ", " ", " ", " ", //
    " ", " ", " ", " ", " ", " ", " ", " ", //
    " ", " ", " ", " ", " ", " ", " ", " ", //
    " ", " ", " ", " ", " ", " ", " ", " ", //
    "P", "P", "P", "P", "P", "P", "P", "P", //
    "R", "N", "B", "Q", "K", "B", "N", "R",
];

fn parse_token(index: usize, token: &str) -> Result<Option<Piece>, LayoutError> {
    let invalid = || LayoutError::InvalidToken {
        index,
        token: token.to_string(),
    };
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (None, _) | (Some(' '), None) => Ok(None),
        (Some(c), None) => Piece::from_char(c).map(Some).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

impl Position {
    /// Build a position from 64 layout tokens and the side to move.
    ///
    /// Only the structural shape is checked; piece counts are not.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], side_to_move: Side) -> Result<Self, LayoutError> {
        if tokens.len() != 64 {
            return Err(LayoutError::WrongLength {
                found: tokens.len(),
            });
        }
        let mut position = Position::empty(side_to_move);
        for (index, token) in tokens.iter().enumerate() {
            position.squares[index] = parse_token(index, token.as_ref())?;
        }
        Ok(position)
    }

    /// Same as `from_tokens` with one character per square.
    pub fn from_layout(layout: &str, side_to_move: Side) -> Result<Self, LayoutError> {
        let tokens: Vec<String> = layout.chars().map(String::from).collect();
        Position::from_tokens(&tokens, side_to_move)
    }

    /// Emit the occupancy as 64 tokens, a space for each empty square.
    #[must_use]
    pub fn to_tokens(&self) -> Vec<char> {
        self.squares
            .iter()
            .map(|slot| slot.map_or(' ', Piece::to_char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_standard_layout_matches_new() {
        let parsed = Position::from_tokens(&STANDARD_LAYOUT, Side::White).unwrap();
        assert_eq!(parsed, Position::new());
    }

    #[test]
    fn test_tokens_round_trip() {
        let position = Position::new();
        let tokens: Vec<String> = position.to_tokens().into_iter().map(String::from).collect();
        assert_eq!(Position::from_tokens(&tokens, Side::White).unwrap(), position);
    }

    #[test]
    fn test_empty_token_forms() {
        let mut tokens = vec![""; 64];
        tokens[0] = "k";
        tokens[63] = "K";
        tokens[10] = " ";
        let position = Position::from_tokens(&tokens, Side::Black).unwrap();
        assert_eq!(position.side_to_move(), Side::Black);
        assert_eq!(
            position.occupancy().iter().filter(|s| s.is_some()).count(),
            2
        );
        assert_eq!(
            position.king_square(Side::White).map(|s| s.to_string()),
            Some("h1".to_string())
        );
    }

    #[test]
    fn test_wrong_length() {
        let tokens = vec![" "; 63];
        assert_eq!(
            Position::from_tokens(&tokens, Side::White),
            Err(LayoutError::WrongLength { found: 63 })
        );
    }

    #[test]
    fn test_invalid_token() {
        let mut tokens = STANDARD_LAYOUT;
        tokens[20] = "x";
        assert_eq!(
            Position::from_tokens(&tokens, Side::White),
            Err(LayoutError::InvalidToken {
                index: 20,
                token: "x".to_string()
            })
        );
        tokens[20] = "pp";
        assert!(Position::from_tokens(&tokens, Side::White).is_err());
    }

    #[test]
    fn test_from_layout_string() {
        let layout: String = STANDARD_LAYOUT.concat();
        let position = Position::from_layout(&layout, Side::White).unwrap();
        assert_eq!(position.find_squares(PieceKind::Pawn, Side::White).len(), 8);
        assert_eq!(position, Position::new());
    }
}
