use super::super::{Position, Side, Square};

impl Position {
    /// Walk each direction until the edge or the first occupied square, which
    /// is included only when it holds an enemy piece.
    pub(crate) fn slide_destinations(
        &self,
        from: Square,
        side: Side,
        directions: &[(i8, i8)],
    ) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(next) = current.offset(df, dr) {
                match self.piece_at(next) {
                    None => targets.push(next),
                    Some(blocker) => {
                        if blocker.side != side {
                            targets.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }
}
