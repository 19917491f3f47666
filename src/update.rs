//! Pheromone update rules: per-ant reinforcement and per-iteration evaporation.

use log::debug;

use crate::error::Result;
use crate::pheromone::PheromoneMatrix;
use crate::tour::Tour;

/// Deposits `deposit_constant / length` on every edge of a finished tour.
///
/// Each edge is reinforced in both directions. Applied right after each ant,
/// so later ants of the same iteration already see the deposit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReinforcementRule {
    pub deposit_constant: f64,
}

impl ReinforcementRule {
    pub fn new(deposit_constant: f64) -> Self {
        ReinforcementRule { deposit_constant }
    }

    /// Amount deposited on each edge of a tour with the given length.
    pub fn delta(&self, length: f64) -> f64 {
        self.deposit_constant / length
    }

    pub fn apply(&self, tour: &Tour, pheromones: &mut PheromoneMatrix) -> Result<()> {
        // All points coincide; there is no quality signal to deposit.
        if !(tour.length > 0.0) {
            debug!("skipping reinforcement of a zero-length tour");
            return Ok(());
        }

        let delta = self.delta(tour.length);
        for (u, v) in tour.edges() {
            pheromones.reinforce(u, v, delta)?;
            pheromones.reinforce(v, u, delta)?;
        }
        Ok(())
    }
}

/// Decays every pheromone entry once per iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporationRule {
    /// Fraction that survives, e.g. 0.9 keeps 90%
    pub retain_fraction: f64,
}

impl EvaporationRule {
    pub fn new(retain_fraction: f64) -> Self {
        EvaporationRule { retain_fraction }
    }

    pub fn apply(&self, pheromones: &mut PheromoneMatrix) {
        pheromones.evaporate(self.retain_fraction);
    }
}
