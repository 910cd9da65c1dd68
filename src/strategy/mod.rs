//! Shooting strategies
//!
//! A strategy plays one complete game against a freshly generated board and
//! reports how many shots it needed:
//! - RandomStrategy: fires at every cell in one shuffled order
//! - SmartStrategy: hunt/target search with checkerboard parity and
//!   sunk-ship inference

use core::fmt;
use core::str::FromStr;

use rand::rngs::SmallRng;

use crate::common::SimError;
use crate::config::Fleet;

/// Interface implemented by the shooting strategies.
///
/// Implementations must be deterministic in `rng`: the same generator state
/// always yields the same board and the same shot count.
pub trait Strategy: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Generate a board from `rng` and shoot until the fleet is sunk.
    fn play(&self, rng: &mut SmallRng) -> Result<u32, SimError>;
}

/// Identifier selecting one of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Random,
    Smart,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Random, StrategyKind::Smart];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Smart => "smart",
        }
    }

    /// Play one game with the built-in strategy of this kind.
    pub fn play(&self, rng: &mut SmallRng, fleet: &Fleet) -> Result<u32, SimError> {
        match self {
            StrategyKind::Random => random::play_random(rng, fleet),
            StrategyKind::Smart => smart::play_smart(rng, fleet),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for strategy names that match no built-in strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStrategy;

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy, expected `random` or `smart`")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownStrategy {}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownStrategy)
    }
}

pub mod random;
pub use random::{run_random, RandomStrategy};

pub mod smart;
pub use smart::{run_smart, Shot, ShotOutcome, SmartGame, SmartStrategy};
