use super::super::tables::PAWN_ATTACKS;
use super::super::{Position, Side, Square};

impl Position {
    pub(crate) fn pawn_destinations(&self, from: Square, side: Side) -> Vec<Square> {
        let mut targets = Vec::with_capacity(4);
        let dir = side.pawn_direction();

        if let Some(single) = from.offset(0, dir) {
            if self.is_empty(single) {
                targets.push(single);
                if from.rank() == side.pawn_start_rank() {
                    if let Some(double) = from.offset(0, 2 * dir) {
                        if self.is_empty(double) {
                            targets.push(double);
                        }
                    }
                }
            }
        }

        for &to in &PAWN_ATTACKS[side.index()][from.index()] {
            if matches!(self.piece_at(to), Some(target) if target.side != side) {
                targets.push(to);
            }
        }
        targets
    }
}
