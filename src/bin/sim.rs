//! Headless Monte Carlo batch runner: repeats the exercise with a greedy
//! highest-probability policy and reports round statistics as JSON.

use bayes_patrol::{config, SearchEngine, SearchStatus};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

// Runs failing to conclude within this many rounds are reported as
// unresolved instead of looping forever.
const MAX_ROUNDS: usize = 10_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <runs>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let runs: usize = args[2].parse()?;

    let mut policy_rng = SmallRng::seed_from_u64(seed);
    let mut rounds_per_run = Vec::with_capacity(runs);
    let mut unresolved = 0usize;

    for run in 0..runs {
        let engine_rng = SmallRng::seed_from_u64(seed.wrapping_add(run as u64 + 1));
        let mut engine = SearchEngine::new(&config::DEFAULT_AREAS, engine_rng)?;

        loop {
            let target = engine
                .areas()
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.probability.total_cmp(&b.probability))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let effort = policy_rng.random_range(0.2..0.9);
            engine.run_round(target, effort)?;
            if engine.status() == SearchStatus::Found {
                rounds_per_run.push(engine.rounds());
                break;
            }
            if engine.rounds() >= MAX_ROUNDS {
                unresolved += 1;
                break;
            }
        }
    }

    let found = rounds_per_run.len();
    let mean_rounds = if found > 0 {
        rounds_per_run.iter().sum::<usize>() as f64 / found as f64
    } else {
        0.0
    };
    let result = json!({
        "runs": runs,
        "found": found,
        "unresolved": unresolved,
        "mean_rounds": mean_rounds,
        "min_rounds": rounds_per_run.iter().min(),
        "max_rounds": rounds_per_run.iter().max(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
