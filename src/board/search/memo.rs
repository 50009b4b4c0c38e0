use std::collections::HashMap;

use parking_lot::Mutex;

use crate::board::state::StateKey;
use crate::board::Move;

/// Root state -> scored moves, keyed on full occupancy and side to move.
///
/// Entries never depend on history, so a hit is valid for any game that
/// reaches the same state. The table is dropped wholesale once full.
pub(crate) struct Memo {
    capacity: usize,
    entries: Mutex<HashMap<StateKey, Vec<(Move, i32)>>>,
}

impl Memo {
    pub(crate) fn new(capacity: usize) -> Self {
        Memo {
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn get(&self, key: &StateKey) -> Option<Vec<(Move, i32)>> {
        if self.capacity == 0 {
            return None;
        }
        self.entries.lock().get(key).cloned()
    }

    pub(crate) fn insert(&self, key: StateKey, scored: Vec<(Move, i32)>) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.clear();
        }
        entries.insert(key, scored);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().clear();
    }
}
