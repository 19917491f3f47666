//! Closed tours and their lengths.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::problem::DistanceMatrix;

/// A closed tour: `nodes` starts and ends at the same index and visits every
/// other node exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// The node sequence, `n + 1` entries long
    pub nodes: Vec<usize>,
    /// The total length of the cycle
    pub length: f64,
}

impl Tour {
    /// Create a tour from a node sequence and its known length.
    pub fn new(nodes: Vec<usize>, length: f64) -> Self {
        Tour { nodes, length }
    }

    /// Create a tour and compute its length from the distance matrix.
    pub fn from_nodes(nodes: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        let length = distances.path_length(&nodes)?;
        Ok(Tour { nodes, length })
    }

    /// First (and last) node of the tour.
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Number of distinct nodes visited.
    pub fn city_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.iter().copied().tuple_windows()
    }

    /// Check that the tour is a Hamiltonian cycle over `node_count` nodes.
    pub fn is_hamiltonian_cycle(&self, node_count: usize) -> bool {
        if node_count == 0 || self.nodes.len() != node_count + 1 {
            return false;
        }
        if self.nodes.first() != self.nodes.last() {
            return false;
        }

        let mut seen = vec![false; node_count];
        for &node in &self.nodes[..node_count] {
            if node >= node_count || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Rotate the cycle so that it starts and ends at `node`.
    ///
    /// Edge order is preserved, so the length is carried over unchanged.
    pub fn rotated_to(&self, node: usize) -> Result<Tour> {
        let open = &self.nodes[..self.city_count()];
        let position = open
            .iter()
            .position(|&n| n == node)
            .ok_or(Error::IndexOutOfRange {
                index: node,
                len: open.len(),
            })?;

        let mut nodes = Vec::with_capacity(self.nodes.len());
        nodes.extend_from_slice(&open[position..]);
        nodes.extend_from_slice(&self.nodes[..=position]);

        Ok(Tour {
            nodes,
            length: self.length,
        })
    }

    /// The node sequence numbered from 1, as shown to users.
    pub fn one_based(&self) -> Vec<usize> {
        self.nodes.iter().map(|&n| n + 1).collect()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" -> "))?;
        write!(f, " ({:.6})", self.length)
    }
}
