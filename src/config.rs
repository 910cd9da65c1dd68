use alloc::vec::Vec;

use crate::common::SimError;
use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const GRID: usize = BOARD_SIZE as usize;
pub const GRID_CELLS: usize = GRID * GRID;

/// Tries per hull before the whole board is thrown away.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;
/// Board restarts before the fleet is declared infeasible.
pub const MAX_BOARD_RESTARTS: usize = 10_000;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_GAMES: usize = 100_000;
/// Work units handed to each worker over a batch.
pub const CHUNKS_PER_THREAD: usize = 5;

pub const NUM_CLASSES: usize = 4;
pub const STANDARD_FLEET: [ShipClass; NUM_CLASSES] = [
    ShipClass::new(5, 1),
    ShipClass::new(4, 1),
    ShipClass::new(3, 2),
    ShipClass::new(2, 1),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Ship length -> number of hulls, checked to fit on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    classes: Vec<ShipClass>,
}

impl Fleet {
    pub fn new<I>(classes: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = ShipClass>,
    {
        let fleet = Fleet {
            classes: classes.into_iter().collect(),
        };
        fleet.validate()?;
        Ok(fleet)
    }

    /// {5:1, 4:1, 3:2, 2:1}
    pub fn standard() -> Self {
        Fleet {
            classes: STANDARD_FLEET.to_vec(),
        }
    }

    pub fn classes(&self) -> &[ShipClass] {
        &self.classes
    }

    /// One length per hull, longest first.
    pub fn hull_lengths(&self) -> Vec<u8> {
        let mut lengths: Vec<u8> = self
            .classes
            .iter()
            .flat_map(|class| core::iter::repeat(class.length()).take(class.count() as usize))
            .collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths
    }

    pub fn hull_count(&self) -> usize {
        self.classes.iter().map(|c| c.count() as usize).sum()
    }

    /// Cells a strategy has to hit to finish a game.
    pub fn total_cells(&self) -> usize {
        self.classes.iter().map(ShipClass::cells).sum()
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.classes.is_empty() {
            return Err(SimError::InvalidFleet("fleet has no ships"));
        }
        for (i, class) in self.classes.iter().enumerate() {
            if class.length() == 0 || class.count() == 0 {
                return Err(SimError::InvalidFleet("ship length and count must be positive"));
            }
            if class.length() as usize > GRID {
                return Err(SimError::InvalidFleet("ship is longer than the board"));
            }
            if self.classes[..i].iter().any(|c| c.length() == class.length()) {
                return Err(SimError::InvalidFleet("ship length listed twice"));
            }
        }
        if self.total_cells() > GRID_CELLS {
            return Err(SimError::InvalidFleet("fleet covers more cells than the board"));
        }
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_fleet_totals() {
        let fleet = Fleet::standard();
        assert_eq!(fleet.total_cells(), TOTAL_SHIP_CELLS);
        assert_eq!(fleet.hull_count(), 5);
        assert_eq!(fleet.hull_lengths(), [5, 4, 3, 3, 2]);
        assert!(fleet.validate().is_ok());
    }

    #[test]
    fn rejects_bad_fleets() {
        assert!(Fleet::new(Vec::<ShipClass>::new()).is_err());
        assert!(Fleet::new([ShipClass::new(11, 1)]).is_err());
        assert!(Fleet::new([ShipClass::new(3, 0)]).is_err());
        assert!(Fleet::new([ShipClass::new(3, 1), ShipClass::new(3, 2)]).is_err());
        assert!(Fleet::new([ShipClass::new(10, 11)]).is_err());
        assert!(Fleet::new([ShipClass::new(5, 1)]).is_ok());
    }
}
