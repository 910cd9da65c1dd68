//! What a shooter has learned about the hidden board so far.

use crate::bitboard::BitBoard;
use crate::common::{Coord, SimError};
use crate::config::GRID;

type BB = BitBoard<u128, GRID>;

/// State of one cell from the shooter's point of view. Unknown cells resolve
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unknown,
    Miss,
    Hit,
}

/// Per-game knowledge grid, kept as two disjoint bitboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Knowledge {
    hits: BB,
    misses: BB,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, (row, col): Coord) -> CellState {
        if self.hits.contains(row, col) {
            CellState::Hit
        } else if self.misses.contains(row, col) {
            CellState::Miss
        } else {
            CellState::Unknown
        }
    }

    pub fn is_unknown(&self, coord: Coord) -> bool {
        self.state(coord) == CellState::Unknown
    }

    pub fn mark_hit(&mut self, (row, col): Coord) -> Result<(), SimError> {
        self.hits.set(row, col)?;
        Ok(())
    }

    pub fn mark_miss(&mut self, (row, col): Coord) -> Result<(), SimError> {
        self.misses.set(row, col)?;
        Ok(())
    }

    /// Mark every unknown cell touching `cells` (8-neighbourhood) as water.
    /// Returns how many cells were newly resolved.
    pub fn mark_surroundings(&mut self, cells: BB) -> usize {
        let fresh = cells.halo() & self.unknown();
        self.misses |= fresh;
        fresh.count_ones()
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn unknown(&self) -> BB {
        !(self.hits | self.misses)
    }
}
