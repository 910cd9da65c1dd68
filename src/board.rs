//! Hidden fleet boards and the randomized generator that fills them.
//!
//! Each occupied cell stores the length of the ship on it. Ships of the same
//! length are therefore indistinguishable once placed; strategies that need
//! to tell hulls apart only ever get the length back.

use core::fmt;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{Coord, SimError};
use crate::config::{Fleet, GRID, MAX_BOARD_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::Placement;

type BB = BitBoard<u128, GRID>;

/// A fully placed fleet. Ships never touch, not even diagonally.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; GRID]; GRID],
    occupied: BB,
    by_length: [BB; GRID + 1],
    hulls: usize,
}

impl Board {
    fn empty() -> Self {
        Board {
            cells: [[0; GRID]; GRID],
            occupied: BB::new(),
            by_length: [BB::new(); GRID + 1],
            hulls: 0,
        }
    }

    /// Place every hull of `fleet` at random, restarting from an empty grid
    /// whenever a hull runs out of attempts.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, fleet: &Fleet) -> Result<Self, SimError> {
        Self::generate_bounded(rng, fleet, MAX_BOARD_RESTARTS)
    }

    /// `generate` with an explicit cap on whole-board restarts.
    pub fn generate_bounded<R: Rng + ?Sized>(
        rng: &mut R,
        fleet: &Fleet,
        max_restarts: usize,
    ) -> Result<Self, SimError> {
        fleet.validate()?;
        let mut lengths = fleet.hull_lengths();
        for restart in 0..max_restarts {
            lengths.shuffle(rng);
            if let Some(board) = Self::try_fill(rng, &lengths) {
                if restart > 0 {
                    log::debug!("board placed after {} restarts", restart);
                }
                return Ok(board);
            }
        }
        log::error!(
            "fleet of {} hulls did not fit after {} restarts",
            lengths.len(),
            max_restarts
        );
        Err(SimError::PlacementExhausted {
            restarts: max_restarts,
        })
    }

    fn try_fill<R: Rng + ?Sized>(rng: &mut R, lengths: &[u8]) -> Option<Self> {
        let mut board = Self::empty();
        'hulls: for &length in lengths {
            for _ in 0..MAX_PLACEMENT_ATTEMPTS {
                let placement = Placement::random(rng, length);
                let Ok(mask) = placement.mask() else {
                    continue;
                };
                if board.is_clear(mask) {
                    board.stamp(&placement, mask);
                    continue 'hulls;
                }
            }
            return None;
        }
        Some(board)
    }

    /// Build a board from explicit placements, enforcing the same buffer
    /// rules as the generator.
    pub fn from_placements(placements: &[Placement]) -> Result<Self, SimError> {
        let mut board = Self::empty();
        for placement in placements {
            let mask = placement.mask()?;
            if !board.is_clear(mask) {
                return Err(SimError::InvalidPlacement {
                    row: placement.row,
                    col: placement.col,
                });
            }
            board.stamp(placement, mask);
        }
        Ok(board)
    }

    /// True when no cell of `mask` or its 3×3 neighbourhood is occupied.
    fn is_clear(&self, mask: BB) -> bool {
        (self.occupied & mask.halo()).is_empty()
    }

    fn stamp(&mut self, placement: &Placement, mask: BB) {
        for (r, c) in placement.cells() {
            self.cells[r][c] = placement.length;
        }
        self.occupied |= mask;
        self.by_length[placement.length as usize] |= mask;
        self.hulls += 1;
    }

    /// Length of the ship on `(row, col)`, or 0 for water.
    ///
    /// Panics if the cell is off the grid.
    pub fn cell(&self, (row, col): Coord) -> u8 {
        self.cells[row][col]
    }

    pub fn is_occupied(&self, (row, col): Coord) -> bool {
        self.occupied.contains(row, col)
    }

    /// Cells holding ships of `length`; empty for lengths not in the fleet.
    pub fn cells_of_length(&self, length: u8) -> BB {
        self.by_length
            .get(length as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Number of occupied cells.
    pub fn ship_cells(&self) -> usize {
        self.occupied.count_ones()
    }

    pub fn hull_count(&self) -> usize {
        self.hulls
    }

    /// Raw rows of the grid.
    pub fn rows(&self) -> &[[u8; GRID]; GRID] {
        &self.cells
    }
}

/// Generate a board with the standard fleet.
pub fn create_board<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, SimError> {
    Board::generate(rng, &Fleet::standard())
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ hulls: {} }}", self.hulls)?;
        for row in self.cells.iter() {
            for &cell in row.iter() {
                if cell == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOTAL_SHIP_CELLS;
    use crate::ship::{Orientation, ShipClass};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn generated_board_has_full_fleet() {
        let mut rng = SmallRng::seed_from_u64(42);
        let board = create_board(&mut rng).unwrap();
        assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS);
        assert_eq!(board.hull_count(), 5);
        assert_eq!(board.cells_of_length(3).count_ones(), 6);
        assert_eq!(board.cells_of_length(5).count_ones(), 5);
        assert!(board.cells_of_length(1).is_empty());
    }

    #[test]
    fn manual_placement_rejects_touching_ships() {
        let a = Placement::new(3, Orientation::Horizontal, 0, 0);
        let diagonal = Placement::new(2, Orientation::Vertical, 1, 3);
        assert_eq!(
            Board::from_placements(&[a, diagonal]).unwrap_err(),
            SimError::InvalidPlacement { row: 1, col: 3 }
        );

        let apart = Placement::new(2, Orientation::Vertical, 2, 3);
        let board = Board::from_placements(&[a, apart]).unwrap();
        assert_eq!(board.cell((0, 2)), 3);
        assert_eq!(board.cell((3, 3)), 2);
        assert_eq!(board.cell((1, 1)), 0);
    }

    #[test]
    fn bottom_corners_do_not_touch() {
        let left = Placement::new(2, Orientation::Horizontal, 9, 0);
        let corner = Placement::new(4, Orientation::Vertical, 6, 9);
        let board = Board::from_placements(&[left, corner]).unwrap();
        assert_eq!(board.cell((9, 0)), 2);
        assert_eq!(board.cell((9, 9)), 4);
        assert_eq!(board.ship_cells(), 6);
    }

    #[test]
    fn infeasible_fleet_is_reported() {
        let mut rng = SmallRng::seed_from_u64(1);
        // 60 cells fit, but the one-cell buffer makes the fleet impossible.
        let fleet = Fleet::new([ShipClass::new(10, 6)]).unwrap();
        assert_eq!(
            Board::generate_bounded(&mut rng, &fleet, 25).unwrap_err(),
            SimError::PlacementExhausted { restarts: 25 }
        );
    }
}
