//! Basic example of using the ACO-TSP library.

use aco_tsp::config::Config;
use aco_tsp::problem::Problem;
use aco_tsp::utils::{format_duration, print_tour_visualization, save_report, RunReport};
use aco_tsp::{brute_force, AntColony};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get instance path from command line or solve a built-in instance
    let args: Vec<String> = env::args().collect();
    let problem = if args.len() > 1 {
        println!("Loading problem from: {}", args[1]);
        Problem::from_file(&args[1])?
    } else {
        Problem::from_coordinates(
            "demo",
            &[
                (0.12, 0.80),
                (0.35, 0.95),
                (0.64, 0.87),
                (0.90, 0.70),
                (0.82, 0.35),
                (0.55, 0.12),
                (0.25, 0.20),
                (0.05, 0.45),
                (0.48, 0.52),
            ],
        )
    };
    println!("Loaded problem: {} with {} nodes", problem.name, problem.len());

    // Configure algorithm
    let config = Config::new()
        .with_iteration_count(200)
        .with_ant_count(30)
        .with_seed(42);

    // Create and run the colony
    let mut colony = AntColony::new(problem.clone(), config.clone())?;
    let best = colony.run()?.clone();

    println!("Search completed in {}", format_duration(colony.run_time()));
    println!("Best tour: {}", best);

    if problem.len() <= brute_force::MAX_EXHAUSTIVE_NODES {
        let optimum = brute_force::solve(&problem.distances)?;
        println!("Exact optimum: {:.6}", optimum.length);
    }

    // Save result
    let output_path = format!("{}.json", problem.name);
    let report = RunReport::new(
        &problem,
        "Ant Colony Method",
        &best,
        colony.run_time(),
        Some(config),
    );
    save_report(&report, &output_path)?;
    println!("Saved result to: {}", output_path);

    print_tour_visualization(&problem, &best);

    Ok(())
}
