use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::board::Board;

pub const HISTORY_LEN: usize = 10;

/// Ring of recent generation hashes. A repeat means the board has become
/// a still-life or an oscillator with period <= `HISTORY_LEN`.
#[derive(Debug, Default)]
pub struct CycleDetector {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

pub fn hash_board(board: &Board) -> u64 {
    let mut hasher = DefaultHasher::new();
    board.hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    /// Records `board` and reports whether it matches one of the recent
    /// generations. Repeats are not recorded again.
    pub fn observe(&mut self, board: &Board) -> bool {
        let current = hash_board(board);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&current) {
            return true;
        }

        self.hashes[self.count % HISTORY_LEN] = current;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.hashes = [0; HISTORY_LEN];
        self.count = 0;
    }
}
