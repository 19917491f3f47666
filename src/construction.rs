//! Probabilistic tour construction for a single ant.
//!
//! Starting from a given node, the ant repeatedly moves to an unvisited node
//! chosen by roulette-wheel sampling, where the weight of candidate `j` seen
//! from the current node `i` is
//!
//! ```text
//! τ[i][j]^α / d[i][j]^β
//! ```
//!
//! The pheromone matrix is only read here; updates belong to the colony.

use log::trace;
use rand::Rng;

use crate::error::{Error, Result};
use crate::pheromone::PheromoneMatrix;
use crate::problem::DistanceMatrix;
use crate::tour::Tour;

/// Builds one tour per call from the current pheromone state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourConstructor {
    /// Pheromone weight
    pub alpha: f64,
    /// Distance weight
    pub beta: f64,
}

impl TourConstructor {
    pub fn new(alpha: f64, beta: f64) -> Self {
        TourConstructor { alpha, beta }
    }

    /// Build a closed tour starting and ending at `start`.
    pub fn build<R: Rng>(
        &self,
        start: usize,
        distances: &DistanceMatrix,
        pheromones: &PheromoneMatrix,
        rng: &mut R,
    ) -> Result<Tour> {
        let n = distances.len();
        if n < 2 {
            return Err(Error::TooFewNodes { count: n });
        }
        if pheromones.len() != n {
            return Err(Error::invalid_config(format!(
                "pheromone matrix covers {} nodes, distance matrix {}",
                pheromones.len(),
                n
            )));
        }
        if start >= n {
            return Err(Error::IndexOutOfRange {
                index: start,
                len: n,
            });
        }

        let mut unvisited: Vec<usize> = (0..n).collect();
        let mut nodes = Vec::with_capacity(n + 1);
        let mut length = 0.0;
        let mut current = start;
        nodes.push(start);

        while unvisited.len() > 1 {
            if let Some(position) = unvisited.iter().position(|&node| node == current) {
                unvisited.remove(position);
            }

            let next = if unvisited.len() == 1 {
                unvisited[0]
            } else {
                let probabilities =
                    self.selection_probabilities(current, &unvisited, distances, pheromones);
                let draw: f64 = rng.gen();
                unvisited[roulette_select(&probabilities, draw)]
            };

            length += distances.at(current, next);
            nodes.push(next);
            current = next;
        }

        length += distances.at(current, start);
        nodes.push(start);

        trace!("ant from node {} closed a tour of length {:.6}", start, length);
        Ok(Tour::new(nodes, length))
    }

    /// Probability of moving from `current` to each of `candidates`, in order.
    ///
    /// The result always sums to 1 (up to rounding). Candidates at distance
    /// zero have an unbounded weight and share all of the mass; if every weight
    /// underflows to zero the distribution is uniform.
    pub fn selection_probabilities(
        &self,
        current: usize,
        candidates: &[usize],
        distances: &DistanceMatrix,
        pheromones: &PheromoneMatrix,
    ) -> Vec<f64> {
        let scores: Vec<f64> = candidates
            .iter()
            .map(|&j| {
                let trail = pheromones.at(current, j).powf(self.alpha);
                let visibility = distances.at(current, j).powf(self.beta);
                trail / visibility
            })
            .collect();

        let unbounded = scores.iter().filter(|s| s.is_infinite()).count();
        if unbounded > 0 {
            let share = 1.0 / unbounded as f64;
            return scores
                .iter()
                .map(|s| if s.is_infinite() { share } else { 0.0 })
                .collect();
        }

        let total: f64 = scores.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            let share = 1.0 / candidates.len() as f64;
            return vec![share; candidates.len()];
        }

        scores.iter().map(|s| s / total).collect()
    }
}

/// Roulette-wheel selection over `probabilities` with a uniform `draw` in [0, 1).
///
/// Returns the first index whose cumulative mass reaches the draw, or the last
/// index when rounding leaves the total just short of it.
pub fn roulette_select(probabilities: &[f64], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative >= draw {
            return index;
        }
    }
    probabilities.len().saturating_sub(1)
}
