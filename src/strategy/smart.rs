//! Hunt-and-target search.
//!
//! While the target queue holds cells the game works through it in FIFO
//! order, skipping anything already resolved. With an empty queue it hunts:
//! the first unknown cell of even parity in row-major order, or a uniformly
//! random unknown cell once the checkerboard is exhausted. A hit either sinks
//! a ship (queue cleared, surroundings marked as water) or queues its unknown
//! orthogonal neighbours.

use alloc::collections::VecDeque;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, SimError};
use crate::config::{Fleet, GRID, GRID_CELLS};
use crate::knowledge::Knowledge;

use super::Strategy;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Miss,
    Hit,
    /// The hit completed every cell of ships with this length.
    Sunk(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

/// A single hunt/target game against a borrowed board.
#[derive(Debug)]
pub struct SmartGame<'a> {
    board: &'a Board,
    knowledge: Knowledge,
    targets: VecDeque<Coord>,
    shots: u32,
    hits: usize,
    required: usize,
}

impl<'a> SmartGame<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            knowledge: Knowledge::new(),
            targets: VecDeque::new(),
            shots: 0,
            hits: 0,
            required: board.ship_cells(),
        }
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Cells queued for the target phase, head first.
    pub fn pending_targets(&self) -> impl Iterator<Item = &Coord> {
        self.targets.iter()
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_complete(&self) -> bool {
        self.hits >= self.required
    }

    /// Fire one shot. Returns `None` once every ship cell has been hit.
    pub fn fire_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<Shot>, SimError> {
        if self.is_complete() {
            return Ok(None);
        }
        if self.shots as usize >= GRID_CELLS {
            return Err(SimError::ShotLimitExceeded { shots: self.shots });
        }
        let coord = self.next_target(rng).ok_or(SimError::TargetsExhausted {
            shots: self.shots,
            hits: self.hits,
            required: self.required,
        })?;

        self.shots += 1;
        let length = self.board.cell(coord);
        if length == 0 {
            self.knowledge.mark_miss(coord)?;
            return Ok(Some(Shot {
                coord,
                outcome: ShotOutcome::Miss,
            }));
        }

        self.hits += 1;
        self.knowledge.mark_hit(coord)?;
        let outcome = if self.sink_check(length) {
            ShotOutcome::Sunk(length)
        } else {
            self.queue_neighbours(coord);
            ShotOutcome::Hit
        };
        Ok(Some(Shot { coord, outcome }))
    }

    /// Play until the fleet is sunk and return the number of shots.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<u32, SimError> {
        while self.fire_next(rng)?.is_some() {}
        Ok(self.shots)
    }

    fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        while let Some(coord) = self.targets.pop_front() {
            if self.knowledge.is_unknown(coord) {
                return Some(coord);
            }
        }
        self.hunt(rng)
    }

    fn hunt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        let unknown = self.knowledge.unknown();
        if let Some(coord) = unknown.iter_set_bits().find(|(r, c)| (r + c) % 2 == 0) {
            return Some(coord);
        }
        let remaining = unknown.count_ones();
        if remaining == 0 {
            return None;
        }
        unknown.iter_set_bits().nth(rng.random_range(0..remaining))
    }

    // Ships are only known by length, so the check counts every hit on
    // cells of that length. Two hulls of equal length share the tally.
    fn sink_check(&mut self, length: u8) -> bool {
        let same_length = self.knowledge.hits() & self.board.cells_of_length(length);
        if same_length.count_ones() != length as usize {
            return false;
        }
        self.targets.clear();
        let marked = self.knowledge.mark_surroundings(same_length);
        log::trace!(
            "sunk length {} after {} shots, {} cells ruled out",
            length,
            self.shots,
            marked
        );
        true
    }

    fn queue_neighbours(&mut self, (row, col): Coord) {
        let neighbours = [
            (row + 1, col),
            (row.wrapping_sub(1), col),
            (row, col + 1),
            (row, col.wrapping_sub(1)),
        ];
        for (r, c) in neighbours {
            if r < GRID && c < GRID && self.knowledge.is_unknown((r, c)) {
                self.targets.push_back((r, c));
            }
        }
    }
}

/// Hunt/target search with checkerboard parity.
#[derive(Debug, Clone, Default)]
pub struct SmartStrategy {
    fleet: Fleet,
}

impl SmartStrategy {
    pub fn new(fleet: Fleet) -> Self {
        Self { fleet }
    }
}

impl Strategy for SmartStrategy {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn play(&self, rng: &mut SmallRng) -> Result<u32, SimError> {
        play_smart(rng, &self.fleet)
    }
}

/// One hunt/target game with the standard fleet.
pub fn run_smart<R: Rng + ?Sized>(rng: &mut R) -> Result<u32, SimError> {
    play_smart(rng, &Fleet::standard())
}

pub fn play_smart<R: Rng + ?Sized>(rng: &mut R, fleet: &Fleet) -> Result<u32, SimError> {
    let board = Board::generate(rng, fleet)?;
    let shots = SmartGame::new(&board).run(rng)?;
    log::trace!("smart game finished after {} shots", shots);
    Ok(shots)
}
