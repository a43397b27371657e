use bayes_patrol::{config, init_logging, ui, SearchEngine, SearchStatus};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible exercises (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 0.5, help = "Effort fraction applied to each search")]
    effort: f64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (exercise will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = SearchEngine::new(&config::DEFAULT_AREAS, rng)?;
    let num_areas = engine.areas().len();

    println!("Starting the search exercise:");
    ui::print_last_known(engine.last_known_global());

    loop {
        ui::print_area_table(engine.areas());
        print!(
            "\nChoose area to search (1-{}) at effort {:.2}, or 'q' to call off the search: ",
            num_areas, cli.effort
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        let choice: usize = match line.parse() {
            Ok(c) if (1..=num_areas).contains(&c) => c,
            _ => {
                println!("Enter a number between 1 and {}.", num_areas);
                continue;
            }
        };

        let evidence = engine.run_round(choice - 1, cli.effort)?;
        ui::print_round_result(engine.rounds(), choice, &evidence);
        if engine.status() == SearchStatus::Found {
            ui::print_actual(engine.actual_global());
            return Ok(());
        }
    }

    println!("Search called off after {} rounds.", engine.rounds());
    ui::print_actual(engine.actual_global());
    Ok(())
}
