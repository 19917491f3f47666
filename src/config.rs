//! Configuration parameters for the ant colony.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

/// Configuration settings for an ant colony run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of iterations (fixed budget, no early exit)
    pub iteration_count: usize,
    /// Number of ants per iteration
    pub ant_count: usize,
    /// Fraction of pheromone retained by evaporation, in (0, 1)
    pub retain_fraction: f64,
    /// Weight of the pheromone trail (α)
    pub alpha: f64,
    /// Weight of the inverse distance (β)
    pub beta: f64,
    /// Pheromone level every edge starts with (τ₀)
    pub initial_pheromone: f64,
    /// Pheromone deposit constant (Q)
    pub deposit_constant: f64,
    /// Seed for the random generator; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            iteration_count: 400,
            ant_count: 50,
            retain_fraction: 0.9,
            alpha: 0.8,
            beta: 7.5,
            initial_pheromone: 0.11,
            deposit_constant: 0.001,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Set the number of iterations.
    pub fn with_iteration_count(mut self, count: usize) -> Self {
        self.iteration_count = count;
        self
    }

    /// Set the number of ants per iteration.
    pub fn with_ant_count(mut self, count: usize) -> Self {
        self.ant_count = count;
        self
    }

    /// Set the fraction of pheromone that survives evaporation.
    pub fn with_retain_fraction(mut self, fraction: f64) -> Self {
        self.retain_fraction = fraction;
        self
    }

    /// Set the pheromone weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the distance weight.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Set the initial pheromone level.
    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Set the deposit constant.
    pub fn with_deposit_constant(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter against its admissible range.
    pub fn validate(&self) -> Result<()> {
        if self.iteration_count == 0 {
            return Err(Error::invalid_config("iteration count must be positive"));
        }
        if self.ant_count == 0 {
            return Err(Error::invalid_config("ant count must be positive"));
        }
        if !(self.retain_fraction > 0.0 && self.retain_fraction < 1.0) {
            return Err(Error::invalid_config(format!(
                "retain fraction must lie in (0, 1), got {}",
                self.retain_fraction
            )));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(Error::invalid_config(format!(
                "alpha must be a non-negative number, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(Error::invalid_config(format!(
                "beta must be a non-negative number, got {}",
                self.beta
            )));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(Error::invalid_config(format!(
                "initial pheromone must be positive, got {}",
                self.initial_pheromone
            )));
        }
        if !(self.deposit_constant.is_finite() && self.deposit_constant > 0.0) {
            return Err(Error::invalid_config(format!(
                "deposit constant must be positive, got {}",
                self.deposit_constant
            )));
        }
        Ok(())
    }
}
