//! # ACO-TSP
//!
//! Ant Colony Optimization for the Euclidean Traveling Salesperson Problem.
//!
//! A colony of ants builds closed tours one after another. Each ant picks its
//! next city with probability proportional to `τ^α / d^β`, then deposits
//! pheromone on its tour inversely proportional to the tour length, so later
//! ants are drawn toward short edges. All pheromone evaporates by a fixed
//! fraction after every iteration. The shortest tour seen is returned,
//! rotated to start at node 0.
//!
//! ```no_run
//! use aco_tsp::{AntColony, Config, Problem};
//!
//! let problem = Problem::from_coordinates(
//!     "square",
//!     &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
//! );
//! let config = Config::new().with_iteration_count(200).with_ant_count(30).with_seed(7);
//! let mut colony = AntColony::new(problem, config)?;
//! let best = colony.run()?;
//! println!("{best}");
//! # Ok::<(), aco_tsp::Error>(())
//! ```

pub mod brute_force;
pub mod colony;
pub mod config;
pub mod construction;
pub mod error;
pub mod logging;
pub mod pheromone;
pub mod problem;
pub mod tour;
pub mod update;
pub mod utils;

pub use crate::colony::{AntColony, ColonyState, IterationReport};
pub use crate::config::Config;
pub use crate::construction::TourConstructor;
pub use crate::error::{Error, Result};
pub use crate::pheromone::PheromoneMatrix;
pub use crate::problem::{DistanceMatrix, Node, Problem};
pub use crate::tour::Tour;
pub use crate::update::{EvaporationRule, ReinforcementRule};
