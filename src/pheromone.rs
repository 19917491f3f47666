//! The colony's shared memory: a directed matrix of pheromone intensities.

use crate::error::{Error, Result};

/// Pheromone level on every directed edge, stored row-major in one owned buffer.
///
/// Every entry is strictly positive for the lifetime of the matrix: it starts at
/// a positive τ₀, reinforcement only adds positive amounts and evaporation
/// multiplies by a positive factor.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Create a matrix with every entry set to `initial`.
    ///
    /// The diagonal is filled as well; it is never read when building tours.
    pub fn new(size: usize, initial: f64) -> Self {
        PheromoneMatrix {
            size,
            values: vec![initial; size * size],
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Pheromone level on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> Result<f64> {
        let index = self.index(from, to)?;
        Ok(self.values[index])
    }

    /// Add `delta` to the edge `from -> to`.
    pub fn reinforce(&mut self, from: usize, to: usize, delta: f64) -> Result<()> {
        let index = self.index(from, to)?;
        self.values[index] += delta;
        Ok(())
    }

    /// Multiply every entry by `retain_fraction`, in place.
    pub fn evaporate(&mut self, retain_fraction: f64) {
        for value in self.values.iter_mut() {
            *value *= retain_fraction;
        }
    }

    /// Copy of the matrix as one row per node.
    pub fn snapshot(&self) -> Vec<Vec<f64>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.values
            .chunks(self.size)
            .map(<[f64]>::to_vec)
            .collect()
    }

    /// Strongest off-diagonal entry, or `None` for fewer than two nodes.
    pub fn max(&self) -> Option<f64> {
        self.off_diagonal().reduce(f64::max)
    }

    /// Weakest off-diagonal entry, or `None` for fewer than two nodes.
    pub fn min(&self) -> Option<f64> {
        self.off_diagonal().reduce(f64::min)
    }

    pub(crate) fn at(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    fn off_diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        let size = self.size;
        self.values
            .iter()
            .enumerate()
            .filter(move |(index, _)| index / size != index % size)
            .map(|(_, &value)| value)
    }

    fn index(&self, from: usize, to: usize) -> Result<usize> {
        for index in [from, to] {
            if index >= self.size {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: self.size,
                });
            }
        }
        Ok(from * self.size + to)
    }
}
