//! The Life rule, precomputed for two horizontally adjacent cells at once.
//!
//! A table index packs a 3x4 window of the previous generation, one bit per
//! cell, at bit `row * 4 + col`:
//!
//! ```text
//!            x-1  x   x+1  x+2
//!   above     0   1    2    3
//!   own row   4   5    6    7
//!   below     8   9   10   11
//! ```
//!
//! Bits 5 and 6 are the two cells being updated. Each of them sees its own
//! 3x3 neighborhood inside the window, so one lookup yields both results.

use crate::grid::{ALIVE, DEAD};

pub const WINDOW_BITS: u32 = 12;
pub const TABLE_SIZE: usize = 1 << WINDOW_BITS;

const LEFT_CELL: usize = 1 << 5;
const RIGHT_CELL: usize = 1 << 6;
const LEFT_NEIGHBORS: usize = 0x757;
const RIGHT_NEIGHBORS: usize = 0xEAE;

/// Bit of the window index holding the cell at `row` (0..3) and `col` (0..4).
#[inline]
pub const fn window_bit(row: usize, col: usize) -> usize {
    1 << (row * 4 + col)
}

/// Classic B3/S23 decision for a single cell.
pub fn next_state(alive: bool, live_neighbors: u32) -> bool {
    match (alive, live_neighbors) {
        (true, 2..=3) => true, // Survives
        (false, 3) => true,    // Becomes alive
        _ => false,            // Dies or remains dead
    }
}

/// Maps every 12-bit window to the next bytes of its two middle cells,
/// `[left, right]`. Built once and never touched again.
pub struct TransitionTable {
    entries: Box<[[u8; 2]]>,
}

impl TransitionTable {
    pub fn build() -> Self {
        let entries = (0..TABLE_SIZE)
            .map(|window| {
                let left = next_state(window & LEFT_CELL != 0, (window & LEFT_NEIGHBORS).count_ones());
                let right = next_state(window & RIGHT_CELL != 0, (window & RIGHT_NEIGHBORS).count_ones());
                [sentinel(left), sentinel(right)]
            })
            .collect();
        TransitionTable { entries }
    }

    #[inline]
    pub fn lookup(&self, window: usize) -> [u8; 2] {
        self.entries[window]
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::build()
    }
}

fn sentinel(alive: bool) -> u8 {
    if alive {
        ALIVE
    } else {
        DEAD
    }
}
