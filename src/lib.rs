#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod driver;
mod knowledge;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod seed;
mod ship;
mod stats;
pub mod strategy;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use driver::*;
pub use knowledge::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use seed::{ChildSeed, SeedSequence};
pub use ship::*;
pub use stats::*;
pub use strategy::{
    run_random, run_smart, RandomStrategy, Shot, ShotOutcome, SmartGame, SmartStrategy, Strategy,
    StrategyKind,
};
