use tracing::Level;
use u_genetic::evolution::{solve_single_variable, solve_two_variable, EvolutionConfig};

// Runs both built-in problems with their presets and prints the progress of
// each generation. Set GA_SEED to reproduce a run.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let seed = std::env::var("GA_SEED")
        .ok()
        .map(|s| s.parse::<u64>())
        .transpose()?;

    let mut single = EvolutionConfig::single_variable();
    let mut two = EvolutionConfig::two_variable();
    if let Some(seed) = seed {
        single = single.with_seed(seed);
        two = two.with_seed(seed);
    }

    println!("Running for f(x) = x");
    let outcome = solve_single_variable(&single)?;
    for stats in &outcome.progress {
        println!(
            "generation: {}, best result is: {}",
            stats.generation, stats.best_result
        );
    }
    println!(
        "ran for {} generations, with best result: {}, when x = {}",
        outcome.generations, outcome.best_value, outcome.best_x
    );

    println!("Running for g(x, y) = 1 + y^2 - x - 0.1 * sin(3 * pi * x)");
    let outcome = solve_two_variable(&two)?;
    for stats in &outcome.progress {
        println!(
            "generation: {}, best result is: {}",
            stats.generation, stats.best_result
        );
    }
    println!(
        "ran for {} generations, with best result: {}, with x = {}, and y = {}",
        outcome.generations, outcome.best_value, outcome.best_x, outcome.best_y
    );

    Ok(())
}
