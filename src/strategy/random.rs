use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, SimError};
use crate::config::{Fleet, GRID};

use super::Strategy;

/// Fires at every cell exactly once, in an order fixed by a single shuffle.
#[derive(Debug, Clone, Default)]
pub struct RandomStrategy {
    fleet: Fleet,
}

impl RandomStrategy {
    pub fn new(fleet: Fleet) -> Self {
        Self { fleet }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn play(&self, rng: &mut SmallRng) -> Result<u32, SimError> {
        play_random(rng, &self.fleet)
    }
}

/// One random-search game with the standard fleet.
pub fn run_random<R: Rng + ?Sized>(rng: &mut R) -> Result<u32, SimError> {
    play_random(rng, &Fleet::standard())
}

pub fn play_random<R: Rng + ?Sized>(rng: &mut R, fleet: &Fleet) -> Result<u32, SimError> {
    let board = Board::generate(rng, fleet)?;
    let fired = random_volley(&board, rng)?;
    log::trace!("random game finished after {} shots", fired.len());
    Ok(fired.len() as u32)
}

/// Shuffle all coordinates once and fire until every ship cell is hit.
/// Returns the coordinates in the order they were fired.
pub fn random_volley<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Vec<Coord>, SimError> {
    let mut order: Vec<Coord> = (0..GRID)
        .flat_map(|r| (0..GRID).map(move |c| (r, c)))
        .collect();
    order.shuffle(rng);

    let required = board.ship_cells();
    let mut fired = Vec::with_capacity(order.len());
    let mut hits = 0usize;
    while hits < required {
        let Some(coord) = order.pop() else {
            return Err(SimError::TargetsExhausted {
                shots: fired.len() as u32,
                hits,
                required,
            });
        };
        if board.is_occupied(coord) {
            hits += 1;
        }
        fired.push(coord);
    }
    Ok(fired)
}
