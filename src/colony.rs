//! The colony controller: runs iterations of ants and keeps the best tour.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::construction::TourConstructor;
use crate::error::{Error, Result};
use crate::pheromone::PheromoneMatrix;
use crate::problem::Problem;
use crate::tour::Tour;
use crate::update::{EvaporationRule, ReinforcementRule};

/// Where the colony is in its fixed iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColonyState {
    NotStarted,
    Running { next_iteration: usize },
    Done,
}

/// Outcome of a single iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub iteration: usize,
    /// Shortest tour found by the ants of this iteration
    pub iteration_best: Tour,
    /// Length of the global best after this iteration
    pub global_best_length: f64,
    /// Whether this iteration replaced the global best
    pub improved: bool,
}

/// Ant Colony Optimization over a single problem instance.
///
/// Ants run one after another against the same pheromone matrix; each ant
/// reinforces its tour before the next one starts, and evaporation follows
/// once all ants of an iteration are done.
pub struct AntColony<R: Rng = ChaCha8Rng> {
    problem: Problem,
    config: Config,
    pheromones: PheromoneMatrix,
    constructor: TourConstructor,
    reinforcement: ReinforcementRule,
    evaporation: EvaporationRule,
    rng: R,
    state: ColonyState,
    best_tour: Option<Tour>,
    iteration_best_lengths: Vec<f64>,
    global_best_lengths: Vec<f64>,
    run_time: Duration,
}

impl AntColony<ChaCha8Rng> {
    /// Create a colony whose generator is seeded from `config.seed`, or from
    /// the operating system when no seed is set.
    pub fn new(problem: Problem, config: Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> AntColony<R> {
    /// Create a colony drawing all randomness from `rng`.
    ///
    /// Fails before any state is built when the configuration is invalid or the
    /// problem has fewer than two nodes.
    pub fn with_rng(problem: Problem, config: Config, rng: R) -> Result<Self> {
        config.validate()?;
        if problem.len() < 2 {
            return Err(Error::TooFewNodes {
                count: problem.len(),
            });
        }

        let pheromones = PheromoneMatrix::new(problem.len(), config.initial_pheromone);

        Ok(AntColony {
            constructor: TourConstructor::new(config.alpha, config.beta),
            reinforcement: ReinforcementRule::new(config.deposit_constant),
            evaporation: EvaporationRule::new(config.retain_fraction),
            iteration_best_lengths: Vec::with_capacity(config.iteration_count),
            global_best_lengths: Vec::with_capacity(config.iteration_count),
            problem,
            config,
            pheromones,
            rng,
            state: ColonyState::NotStarted,
            best_tour: None,
            run_time: Duration::ZERO,
        })
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// The validated configuration the colony was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wall-clock time spent inside `run`.
    pub fn run_time(&self) -> Duration {
        self.run_time
    }

    pub fn state(&self) -> ColonyState {
        self.state
    }

    /// Read-only view of the pheromone matrix.
    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// Global best so far; rotated to start at node 0 once the run is done.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.best_tour.as_ref()
    }

    /// Best length of each completed iteration, in order.
    pub fn iteration_best_lengths(&self) -> &[f64] {
        &self.iteration_best_lengths
    }

    /// Global best length after each completed iteration, in order.
    pub fn global_best_lengths(&self) -> &[f64] {
        &self.global_best_lengths
    }

    /// Run every remaining iteration and return the global best tour.
    pub fn run(&mut self) -> Result<&Tour> {
        let start_time = Instant::now();
        info!(
            "running {} iterations of {} ants on {} nodes",
            self.config.iteration_count,
            self.config.ant_count,
            self.problem.len()
        );

        while self.advance()?.is_some() {}

        self.run_time += start_time.elapsed();
        let best = self.best_tour.as_ref().ok_or(Error::NoTour)?;
        info!("best tour length {:.6} after {:?}", best.length, self.run_time);
        Ok(best)
    }

    /// Run one iteration. Returns `None` once the iteration budget is spent.
    pub fn advance(&mut self) -> Result<Option<IterationReport>> {
        let iteration = match self.state {
            ColonyState::NotStarted => 0,
            ColonyState::Running { next_iteration } => next_iteration,
            ColonyState::Done => return Ok(None),
        };

        let iteration_best = self.run_ants()?;
        self.evaporation.apply(&mut self.pheromones);

        let improved = match &self.best_tour {
            Some(best) => iteration_best.length < best.length,
            None => true,
        };
        if improved {
            self.best_tour = Some(iteration_best.clone());
        }

        let global_best_length = self
            .best_tour
            .as_ref()
            .map_or(iteration_best.length, |best| best.length);
        self.iteration_best_lengths.push(iteration_best.length);
        self.global_best_lengths.push(global_best_length);

        debug!(
            "iteration {}: best {:.6}, global {:.6}{}",
            iteration,
            iteration_best.length,
            global_best_length,
            if improved { " (improved)" } else { "" }
        );

        if iteration + 1 >= self.config.iteration_count {
            self.finish()?;
        } else {
            self.state = ColonyState::Running {
                next_iteration: iteration + 1,
            };
        }

        Ok(Some(IterationReport {
            iteration,
            iteration_best,
            global_best_length,
            improved,
        }))
    }

    /// Send every ant of one iteration out, returning the shortest tour.
    fn run_ants(&mut self) -> Result<Tour> {
        let mut best = self.run_ant()?;
        for _ in 1..self.config.ant_count {
            let tour = self.run_ant()?;
            if tour.length < best.length {
                best = tour;
            }
        }
        Ok(best)
    }

    fn run_ant(&mut self) -> Result<Tour> {
        let start = self.rng.gen_range(0..self.problem.len());
        let tour = self.constructor.build(
            start,
            &self.problem.distances,
            &self.pheromones,
            &mut self.rng,
        )?;
        self.reinforcement.apply(&tour, &mut self.pheromones)?;
        Ok(tour)
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(best) = &self.best_tour {
            self.best_tour = Some(best.rotated_to(0)?);
        }
        self.state = ColonyState::Done;
        Ok(())
    }
}
