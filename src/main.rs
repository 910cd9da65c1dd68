#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_mc::{
    compare, init_logging, simulate_kind, AggregateStatistics, BatchResult, Comparison, SimConfig,
    StrategyKind, DEFAULT_GAMES, DEFAULT_SEED,
};
#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Monte Carlo comparison of Battleship search strategies", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum StrategyArg {
    Random,
    Smart,
}

#[cfg(feature = "std")]
impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => StrategyKind::Random,
            StrategyArg::Smart => StrategyKind::Smart,
        }
    }
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct BatchArgs {
    /// Number of games to simulate.
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    games: usize,
    #[arg(long, default_value_t = DEFAULT_SEED, help = "Base seed; the same seed replays the same games")]
    seed: u64,
    /// Worker threads (defaults to the number of CPUs).
    #[arg(long)]
    threads: Option<usize>,
}

#[cfg(feature = "std")]
impl BatchArgs {
    fn config(&self) -> SimConfig {
        let config = SimConfig::new(self.games, self.seed);
        match self.threads {
            Some(n) => config.with_threads(n),
            None => config,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Run one strategy and print its statistics and histogram.
    Run {
        #[arg(long, value_enum, default_value_t = StrategyArg::Smart)]
        strategy: StrategyArg,
        #[command(flatten)]
        batch: BatchArgs,
    },
    /// Run both strategies on the same seed and compare them.
    Compare {
        #[command(flatten)]
        batch: BatchArgs,
    },
}

#[cfg(feature = "std")]
fn print_stats(result: &BatchResult) {
    let s: &AggregateStatistics = &result.stats;
    println!("Strategy:      {}", result.strategy);
    println!("Games:         {}", s.games);
    println!("Average shots: {:.2}", s.avg);
    println!("Median:        {:.1}", s.median);
    println!("Variance:      {:.2}", s.variance);
    println!("Std deviation: {:.2}", s.std_dev);
    println!("Min / Max:     {} / {}", s.min, s.max);
    println!("Duration:      {:.2}s", s.duration_seconds);
}

#[cfg(feature = "std")]
fn print_histogram(result: &BatchResult) {
    const WIDTH: usize = 50;
    let bins = result.histogram();
    let peak = bins.iter().map(|&(_, n)| n).max().unwrap_or(1);
    println!();
    for (shots, n) in bins {
        let bar = "#".repeat((n * WIDTH).div_ceil(peak));
        println!("{:>3} | {:<width$} {}", shots, bar, n, width = WIDTH);
    }
}

#[cfg(feature = "std")]
fn print_comparison(cmp: &Comparison) {
    let (r, s) = (&cmp.random.stats, &cmp.smart.stats);
    println!("{}", "=".repeat(60));
    println!("{:<20} | {:<18} | {:<18}", "METRIC", "RANDOM STRATEGY", "SMART AI");
    println!("{}", "-".repeat(60));
    for (label, a, b) in [
        ("Average Shots", r.avg, s.avg),
        ("Median", r.median, s.median),
        ("Variance", r.variance, s.variance),
        ("Std Deviation", r.std_dev, s.std_dev),
    ] {
        println!("{:<20} | {:<18.2} | {:<18.2}", label, a, b);
    }
    println!("{}", "-".repeat(60));
    println!("{:<20} | {:<18} | {:<18}", "Minimum Shots", r.min, s.min);
    println!("{:<20} | {:<18} | {:<18}", "Maximum Shots", r.max, s.max);
    println!("{}", "=".repeat(60));
    println!(
        "Summary: the smart strategy needs {:.2} fewer shots on average.",
        cmp.improvement
    );
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run { strategy, batch } => {
            let result = simulate_kind(&batch.config(), strategy.into())?;
            print_stats(&result);
            print_histogram(&result);
        }
        Commands::Compare { batch } => {
            println!("--- Battleship Monte Carlo Analysis (seed: {}) ---", batch.seed);
            let cmp = compare(&batch.config())?;
            print_comparison(&cmp);
        }
    }
    Ok(())
}
