use battleship_mc::{compare, init_logging, SimConfig};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    init_logging();
    let cmp = compare(&SimConfig::new(games, seed))?;

    let result = json!({
        "seed": seed,
        "random": cmp.random.stats,
        "smart": cmp.smart.stats,
        "improvement": cmp.improvement,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
