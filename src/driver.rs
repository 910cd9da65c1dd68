//! Parallel Monte Carlo driver.
//!
//! Seeds for every game are derived up front from the base seed, the games
//! are fanned out over a rayon pool in chunks, and the shot counts come back
//! in game order. A batch either yields exactly `games` results or fails.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::common::SimError;
use crate::config::{Fleet, CHUNKS_PER_THREAD, DEFAULT_GAMES, DEFAULT_SEED};
use crate::seed::SeedSequence;
use crate::stats::{histogram, AggregateStatistics};
use crate::strategy::{RandomStrategy, SmartStrategy, Strategy, StrategyKind};

/// Parameters for one or more batches.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub games: usize,
    pub seed: u64,
    /// Worker count; `None` uses the global pool sized to the machine.
    pub threads: Option<usize>,
    pub fleet: Fleet,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            seed: DEFAULT_SEED,
            threads: None,
            fleet: Fleet::standard(),
        }
    }
}

impl SimConfig {
    pub fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            ..Self::default()
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = fleet;
        self
    }
}

/// Statistics of one batch plus the raw per-game shot counts.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub strategy: &'static str,
    pub stats: AggregateStatistics,
    #[serde(skip)]
    pub shots: Vec<u32>,
}

impl BatchResult {
    /// `(shots, games)` pairs for external plotting.
    pub fn histogram(&self) -> Vec<(u32, usize)> {
        histogram(&self.shots)
    }
}

/// Both strategies run over the same seeds.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub random: BatchResult,
    pub smart: BatchResult,
    /// Average shots saved by the smart strategy.
    pub improvement: f64,
}

/// Run `n_games` of `strategy` on the global pool.
pub fn run_batch<S>(n_games: usize, strategy: &S, base_seed: u64) -> Result<BatchResult, SimError>
where
    S: Strategy + ?Sized,
{
    let start = Instant::now();
    if n_games == 0 {
        return Err(SimError::NoGames);
    }

    let seeds = SeedSequence::new(base_seed).spawn(n_games);
    let threads = rayon::current_num_threads();
    let chunk = (n_games / (threads * CHUNKS_PER_THREAD)).max(1);
    log::info!(
        "starting {} {} games on {} threads (seed {}, chunk {})",
        n_games,
        strategy.name(),
        threads,
        base_seed,
        chunk
    );

    let shots = seeds
        .par_iter()
        .with_min_len(chunk)
        .map(|child| strategy.play(&mut child.rng()))
        .collect::<Result<Vec<u32>, SimError>>()
        .inspect_err(|e| log::error!("{} batch aborted: {}", strategy.name(), e))?;

    let duration = start.elapsed().as_secs_f64();
    let stats = AggregateStatistics::from_shots(&shots, duration).ok_or(SimError::NoGames)?;
    log::info!(
        "{} batch finished in {:.2}s (avg {:.2} shots)",
        strategy.name(),
        duration,
        stats.avg
    );
    Ok(BatchResult {
        strategy: strategy.name(),
        stats,
        shots,
    })
}

/// Run `strategy` with the games, seed and worker count from `config`.
pub fn simulate<S>(config: &SimConfig, strategy: &S) -> Result<BatchResult, SimError>
where
    S: Strategy + ?Sized,
{
    match config.threads {
        None => run_batch(config.games, strategy, config.seed),
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| SimError::ThreadPool(e.to_string()))?;
            pool.install(|| run_batch(config.games, strategy, config.seed))
        }
    }
}

/// Run the built-in strategy `kind` with the fleet from `config`.
pub fn simulate_kind(config: &SimConfig, kind: StrategyKind) -> Result<BatchResult, SimError> {
    config.fleet.validate()?;
    match kind {
        StrategyKind::Random => simulate(config, &RandomStrategy::new(config.fleet.clone())),
        StrategyKind::Smart => simulate(config, &SmartStrategy::new(config.fleet.clone())),
    }
}

/// Run both strategies with the same base seed.
pub fn compare(config: &SimConfig) -> Result<Comparison, SimError> {
    let random = simulate_kind(config, StrategyKind::Random)?;
    let smart = simulate_kind(config, StrategyKind::Smart)?;
    let improvement = random.stats.avg - smart.stats.avg;
    Ok(Comparison {
        random,
        smart,
        improvement,
    })
}
