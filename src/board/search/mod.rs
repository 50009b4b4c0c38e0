//! Search and evaluation over reachable positions.
//!
//! The engine never touches the position it is asked about: each query
//! works on a private copy, making and unmaking moves on it.
//!
//! - One-ply listing of every reachable position with its evaluation
//! - Best-move selection with first-in-enumeration tie-breaking
//! - Optional deeper negamax with a node budget
//! - Uniform random move choice from an injected RNG

mod memo;
mod params;

use log::{debug, trace};
use rand::Rng;

use super::error::SearchError;
use super::eval::{Material, Scorer};
use super::{Move, Position};
use memo::Memo;
pub use params::SearchParams;

/// A position one ply from some root, with the move that produced it.
///
/// `evaluation` is from the point of view of the side that moved at the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluatedPosition {
    pub position: Position,
    pub mv: Move,
    pub evaluation: i32,
}

/// Per-query node accounting
struct NodeCounter {
    nodes: u64,
    budget: Option<u64>,
}

impl NodeCounter {
    fn exhausted(&self) -> bool {
        self.budget.is_some_and(|limit| self.nodes >= limit)
    }
}

pub struct Engine<S: Scorer = Material> {
    scorer: S,
    params: SearchParams,
    memo: Memo,
}

impl Engine<Material> {
    /// One-ply material engine
    #[must_use]
    pub fn new() -> Self {
        Engine::with_scorer(Material, SearchParams::default())
    }
}

impl Default for Engine<Material> {
    fn default() -> Self {
        Engine::new()
    }
}

impl<S: Scorer> Engine<S> {
    pub fn with_scorer(scorer: S, params: SearchParams) -> Self {
        let memo = Memo::new(params.memo_capacity);
        Engine {
            scorer,
            params,
            memo,
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Number of root states currently memoized
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    pub fn clear_memo(&self) {
        self.memo.clear();
    }

    /// Every position reachable in one move, in move enumeration order.
    #[must_use]
    pub fn reachable(&self, position: &Position) -> Vec<EvaluatedPosition> {
        self.scored_moves(position)
            .into_iter()
            .map(|(mv, evaluation)| {
                let mut child = position.clone();
                child.make_move(mv);
                EvaluatedPosition {
                    position: child,
                    mv,
                    evaluation,
                }
            })
            .collect()
    }

    /// The best reachable position; the earliest wins ties.
    pub fn evaluate(&self, position: &Position) -> Result<EvaluatedPosition, SearchError> {
        let no_moves = SearchError::NoLegalMoves {
            side: position.side_to_move(),
        };
        // Dead positions never reach the memo
        if !position.has_legal_moves() {
            return Err(no_moves);
        }
        let best = self
            .reachable(position)
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.evaluation > best.evaluation {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(no_moves)?;
        debug!("best move {} scores {}", best.mv, best.evaluation);
        Ok(best)
    }

    /// Pick uniformly among all legal moves of the side to move.
    pub fn choose_random_move<R: Rng + ?Sized>(
        &self,
        position: &Position,
        rng: &mut R,
    ) -> Result<Move, SearchError> {
        let moves = position.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves {
                side: position.side_to_move(),
            });
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        debug!("randomly chose {} of {} moves", mv, moves.len());
        Ok(mv)
    }

    fn scored_moves(&self, position: &Position) -> Vec<(Move, i32)> {
        let key = position.state_key();
        if let Some(hit) = self.memo.get(&key) {
            trace!("memo hit for {} to move", position.side_to_move());
            return hit;
        }

        let mut scratch = position.clone();
        let mut counter = NodeCounter {
            nodes: 0,
            budget: self.params.node_budget,
        };
        let depth = self.params.effective_depth();
        let mut scored = Vec::new();
        for mv in scratch.legal_moves() {
            scratch.make_move(mv);
            let value = self.negamax(&mut scratch, depth - 1, &mut counter).saturating_neg();
            scratch.unmake_move();
            scored.push((mv, value));
        }
        trace!(
            "scored {} moves at depth {} in {} nodes",
            scored.len(),
            depth,
            counter.nodes
        );

        self.memo.insert(key, scored.clone());
        scored
    }

    /// Value of `position` for its side to move. Scores are negated with
    /// saturation, so a scorer may use the full `i32` range.
    fn negamax(&self, position: &mut Position, depth: u32, counter: &mut NodeCounter) -> i32 {
        counter.nodes += 1;
        if depth == 0 || counter.exhausted() {
            return self.scorer.score(position);
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            return self.scorer.score(position);
        }

        let mut best = i32::MIN;
        for mv in moves {
            position.make_move(mv);
            let value = self.negamax(position, depth - 1, counter).saturating_neg();
            position.unmake_move();
            best = best.max(value);
        }
        best
    }
}
