//! Ship classes and single-hull placements.

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{Coord, SimError};
use crate::config::GRID;

type BB = BitBoard<u128, GRID>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One entry of a fleet: how many hulls of a given length to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    length: u8,
    count: u8,
}

impl ShipClass {
    pub const fn new(length: u8, count: u8) -> Self {
        Self { length, count }
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    /// Cells covered by all hulls of this class.
    pub fn cells(&self) -> usize {
        self.length as usize * self.count as usize
    }
}

/// A hull of `length` anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub length: u8,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    pub const fn new(length: u8, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            length,
            orientation,
            row,
            col,
        }
    }

    /// Uniform orientation, then a uniform anchor among those that keep the
    /// hull on the grid. `length` must not exceed the grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: u8) -> Self {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let span = GRID - length as usize;
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (GRID - 1, span),
            Orientation::Vertical => (span, GRID - 1),
        };
        let row = rng.random_range(0..=max_r);
        let col = rng.random_range(0..=max_c);
        Self::new(length, orientation, row, col)
    }

    /// Cells covered by the hull, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.length as usize).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Occupancy mask of the hull; fails when any cell leaves the grid.
    pub fn mask(&self) -> Result<BB, SimError> {
        if self.length == 0 {
            return Err(SimError::InvalidPlacement {
                row: self.row,
                col: self.col,
            });
        }
        BB::from_cells(self.cells()).map_err(|_| SimError::InvalidPlacement {
            row: self.row,
            col: self.col,
        })
    }
}
