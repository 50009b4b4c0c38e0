#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Plies explored below the root; values below 1 are treated as 1
    pub depth: u32,
    /// Positions visited per root query before the rest are scored statically
    pub node_budget: Option<u64>,
    /// Root states remembered between queries; 0 disables memoization
    pub memo_capacity: usize,
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..SearchParams::default()
        }
    }

    pub(crate) fn effective_depth(&self) -> u32 {
        self.depth.max(1)
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 1,
            node_budget: None,
            memo_capacity: 4096,
        }
    }
}
