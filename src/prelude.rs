//! Commonly used types and utilities for ease of import.

pub use crate::{create_board, Board, Fleet, SeedSequence, SimError, Strategy, StrategyKind};

#[cfg(feature = "std")]
pub use crate::{compare, run_batch, simulate, simulate_kind, BatchResult, SimConfig};
