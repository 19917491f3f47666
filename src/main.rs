use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;

use aco_tsp::logging::{init_logger, level_from_verbosity};
use aco_tsp::utils::{
    format_seconds, print_pheromone_visualization, print_tour_visualization, save_report,
    RunReport, RunStatistics,
};
use aco_tsp::{brute_force, AntColony, Config, Error, Problem, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Exact search over every tour (small inputs only)
    BruteForce,
    /// Ant Colony Optimization
    AntColony,
}

impl Method {
    fn label(self) -> &'static str {
        match self {
            Method::BruteForce => "Brute-Force Method",
            Method::AntColony => "Ant Colony Method",
        }
    }
}

/// Approximate the shortest closed tour through a set of points.
#[derive(Debug, Parser)]
#[command(name = "aco-tsp", version, about)]
struct Cli {
    /// Input file with one `x,y` pair per line
    #[arg(default_value = "input05.txt")]
    input: PathBuf,

    /// Show pheromone intensities instead of the tour
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pheromone_display: bool,

    /// Solving method
    #[arg(long, value_enum, default_value_t = Method::AntColony)]
    method: Method,

    /// JSON file with colony parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    iterations: Option<usize>,

    #[arg(long)]
    ants: Option<usize>,

    /// Fraction of pheromone kept after each iteration
    #[arg(long)]
    retain: Option<f64>,

    #[arg(long)]
    alpha: Option<f64>,

    #[arg(long)]
    beta: Option<f64>,

    #[arg(long)]
    initial_pheromone: Option<f64>,

    #[arg(long)]
    deposit: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Number of edges listed by the pheromone display
    #[arg(long, default_value_t = 20)]
    top_edges: usize,

    /// Write the result to this file (JSON when it ends in `.json`)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn colony_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };

        if let Some(v) = self.iterations {
            config = config.with_iteration_count(v);
        }
        if let Some(v) = self.ants {
            config = config.with_ant_count(v);
        }
        if let Some(v) = self.retain {
            config = config.with_retain_fraction(v);
        }
        if let Some(v) = self.alpha {
            config = config.with_alpha(v);
        }
        if let Some(v) = self.beta {
            config = config.with_beta(v);
        }
        if let Some(v) = self.initial_pheromone {
            config = config.with_initial_pheromone(v);
        }
        if let Some(v) = self.deposit {
            config = config.with_deposit_constant(v);
        }
        if let Some(v) = self.seed {
            config = config.with_seed(v);
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.method == Method::BruteForce && cli.pheromone_display {
        return Err(Error::usage(
            "brute force has no pheromones to display; run with --pheromone-display false",
        ));
    }

    let start_time = Instant::now();
    let problem = Problem::from_file(&cli.input)?;
    info!(
        "loaded {} with {} nodes",
        cli.input.display(),
        problem.len()
    );

    let (tour, config) = match cli.method {
        Method::BruteForce => (brute_force::solve(&problem.distances)?, None),
        Method::AntColony => {
            let config = cli.colony_config()?;
            let mut colony = AntColony::new(problem.clone(), config.clone())?;
            let tour = colony.run()?.clone();

            let stats = RunStatistics::from_history(
                colony.iteration_best_lengths(),
                colony.global_best_lengths(),
                config.ant_count,
                colony.run_time(),
            );
            info!("{}", stats.format());

            if cli.pheromone_display {
                print_pheromone_visualization(&problem, colony.pheromones(), cli.top_edges);
            }
            (tour, Some(config))
        }
    };

    if !cli.pheromone_display {
        print_tour_visualization(&problem, &tour);
    }

    let elapsed = start_time.elapsed();

    println!("Method: {}", cli.method.label());
    println!("Shortest Distance: {}", tour.length);
    println!("Shortest Path: {:?}", tour.one_based());
    println!("Time: {}", format_seconds(elapsed));

    if let Some(path) = &cli.output {
        let report = RunReport::new(&problem, cli.method.label(), &tour, elapsed, config);
        save_report(&report, path)?;
        info!("saved result to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logger(level_from_verbosity(cli.verbose, cli.quiet)) {
        eprintln!("{e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_with_pheromone_display_is_rejected_before_loading() {
        let cli = Cli::parse_from(["aco-tsp", "missing.txt", "--method", "brute-force"]);
        assert!(cli.pheromone_display);

        // A missing input would be an Io error if the file were read first.
        assert!(matches!(run(&cli), Err(Error::Usage(_))));
    }

    #[test]
    fn test_brute_force_without_pheromone_display_reads_input() {
        let cli = Cli::parse_from([
            "aco-tsp",
            "missing.txt",
            "--method",
            "brute-force",
            "--pheromone-display",
            "false",
        ]);

        assert!(matches!(run(&cli), Err(Error::Io(_))));
    }

    #[test]
    fn test_colony_overrides_reach_config() {
        let cli = Cli::parse_from([
            "aco-tsp",
            "points.txt",
            "--iterations",
            "12",
            "--ants",
            "3",
            "--seed",
            "5",
        ]);
        let config = cli.colony_config().unwrap();

        assert_eq!(config.iteration_count, 12);
        assert_eq!(config.ant_count, 3);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.beta, Config::default().beta);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = Cli::parse_from(["aco-tsp", "points.txt", "--retain", "1.5"]);
        assert!(matches!(
            cli.colony_config(),
            Err(Error::InvalidConfig(_))
        ));
    }
}
