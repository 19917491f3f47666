//! Problem definition: nodes and their precomputed distances.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// A city in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Create a new node.
    pub fn new(x: f64, y: f64) -> Self {
        Node { x, y }
    }

    /// Calculate the Euclidean distance between two nodes.
    pub fn distance(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pairwise Euclidean distances, stored row-major in one buffer.
///
/// Symmetric with a zero diagonal. Never mutated after [`DistanceMatrix::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute the distance between every pair of nodes.
    pub fn build(nodes: &[Node]) -> Self {
        let size = nodes.len();
        let mut values = vec![0.0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let d = nodes[i].distance(&nodes[j]);
                values[i * size + j] = d;
                values[j * size + i] = d;
            }
        }

        DistanceMatrix { size, values }
    }

    /// Number of nodes covered by the matrix.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance between `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.at(i, j))
    }

    /// Sum of the edges along a node sequence.
    pub fn path_length(&self, path: &[usize]) -> Result<f64> {
        path.iter()
            .tuple_windows()
            .map(|(&from, &to)| self.get(from, to))
            .sum()
    }

    /// Unchecked lookup for callers that already validated their indices.
    pub(crate) fn at(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.size,
            })
        }
    }
}

/// A TSP instance.
#[derive(Debug, Clone)]
pub struct Problem {
    pub name: String,
    pub nodes: Vec<Node>,
    pub distances: DistanceMatrix,
}

impl Problem {
    /// Create a new problem and precompute its distance matrix.
    pub fn new(name: impl Into<String>, nodes: Vec<Node>) -> Self {
        let distances = DistanceMatrix::build(&nodes);

        Problem {
            name: name.into(),
            nodes,
            distances,
        }
    }

    /// Create a problem from plain `(x, y)` pairs.
    pub fn from_coordinates(name: impl Into<String>, coordinates: &[(f64, f64)]) -> Self {
        let nodes = coordinates
            .iter()
            .map(|&(x, y)| Node::new(x, y))
            .collect();
        Problem::new(name, nodes)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Load a problem from a text file with one `x,y` pair per line.
    ///
    /// Blank lines are skipped; any other malformed line is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut nodes = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut parts = trimmed.split(',').map(str::trim);
            let (x, y) = match (parts.next(), parts.next(), parts.next()) {
                (Some(x), Some(y), None) => (x, y),
                _ => {
                    return Err(Error::parse(
                        line_number,
                        format!("expected `x,y`, found `{trimmed}`"),
                    ))
                }
            };

            let x = parse_coordinate(x, line_number)?;
            let y = parse_coordinate(y, line_number)?;
            nodes.push(Node::new(x, y));
        }

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "instance".to_string());

        Ok(Problem::new(name, nodes))
    }
}

fn parse_coordinate(value: &str, line: usize) -> Result<f64> {
    let parsed: f64 = value
        .parse()
        .map_err(|e| Error::parse(line, format!("invalid coordinate `{value}`: {e}")))?;
    if !parsed.is_finite() {
        return Err(Error::parse(line, format!("coordinate `{value}` is not finite")));
    }
    Ok(parsed)
}
