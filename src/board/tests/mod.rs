//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move counts from the starting position
//! - `movegen.rs` - Per-piece destination rules
//! - `make_unmake.rs` - Apply/undo correctness and error atomicity
//! - `search.rs` - Engine evaluation and move selection
//! - `proptest.rs` - Property-based tests


use crate::board::{Position, Square};

/// Parse a square in test code
pub(super) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

/// Snapshot everything undo must restore
pub(super) fn snapshot(position: &Position) -> (Vec<char>, crate::board::Side, usize) {
    (
        position.to_tokens(),
        position.side_to_move(),
        position.history().len(),
    )
}
