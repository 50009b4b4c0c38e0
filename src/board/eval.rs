//! Position scoring.
//!
//! A `Scorer` rates a position from the point of view of the side to move in
//! that position: higher is better for whoever is about to play.

use super::{Position, Side};

pub trait Scorer {
    fn score(&self, position: &Position) -> i32;
}

impl<F> Scorer for F
where
    F: Fn(&Position) -> i32,
{
    fn score(&self, position: &Position) -> i32 {
        self(position)
    }
}

/// Material balance in centipawns.
#[derive(Clone, Copy, Debug, Default)]
pub struct Material;

impl Material {
    /// Total value of the pieces `side` has on the board
    #[must_use]
    pub fn total(position: &Position, side: Side) -> i32 {
        position
            .pieces_of(side)
            .map(|(_, piece)| piece.kind.value())
            .sum()
    }
}

impl Scorer for Material {
    fn score(&self, position: &Position) -> i32 {
        let us = position.side_to_move();
        Material::total(position, us) - Material::total(position, us.opponent())
    }
}
