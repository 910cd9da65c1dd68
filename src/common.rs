//! Common types for the simulator: coordinates and the crate error.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;

/// A `(row, col)` position on the grid.
pub type Coord = (usize, usize);

/// Errors raised while generating boards, playing games or running batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Underlying bitboard error (coordinate off the grid).
    BitBoard(BitBoardError),
    /// The fleet cannot be placed on the configured grid.
    InvalidFleet(&'static str),
    /// A manual placement overlaps, touches another ship or leaves the grid.
    InvalidPlacement { row: usize, col: usize },
    /// Every board restart failed; the fleet/grid combination is infeasible.
    PlacementExhausted { restarts: usize },
    /// A strategy ran out of cells before sinking the fleet.
    TargetsExhausted {
        shots: u32,
        hits: usize,
        required: usize,
    },
    /// A game fired more shots than the grid has cells.
    ShotLimitExceeded { shots: u32 },
    /// A batch was requested with zero games.
    NoGames,
    /// The worker pool could not be built.
    ThreadPool(String),
}

impl From<BitBoardError> for SimError {
    fn from(err: BitBoardError) -> Self {
        SimError::BitBoard(err)
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            SimError::InvalidFleet(reason) => write!(f, "Invalid fleet: {}", reason),
            SimError::InvalidPlacement { row, col } => {
                write!(f, "Ship at ({}, {}) cannot be placed", row, col)
            }
            SimError::PlacementExhausted { restarts } => write!(
                f,
                "Unable to place the fleet after {} board restarts",
                restarts
            ),
            SimError::TargetsExhausted {
                shots,
                hits,
                required,
            } => write!(
                f,
                "No targets left after {} shots with {}/{} hits",
                shots, hits, required
            ),
            SimError::ShotLimitExceeded { shots } => {
                write!(f, "Game exceeded the shot limit after {} shots", shots)
            }
            SimError::NoGames => write!(f, "A batch needs at least one game"),
            SimError::ThreadPool(msg) => write!(f, "Unable to build worker pool: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimError {}
