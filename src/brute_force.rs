//! Exact solver by exhaustive enumeration, for small instances.

use itertools::Itertools;
use log::debug;

use crate::error::{Error, Result};
use crate::problem::DistanceMatrix;
use crate::tour::Tour;

/// Largest instance the exhaustive search accepts; (n - 1)! tours are checked.
pub const MAX_EXHAUSTIVE_NODES: usize = 12;

/// Find the shortest tour by trying every order of nodes `1..n` after node 0.
///
/// The returned tour starts and ends at node 0. Ties keep the first order found.
pub fn solve(distances: &DistanceMatrix) -> Result<Tour> {
    let n = distances.len();
    if n < 2 {
        return Err(Error::TooFewNodes { count: n });
    }
    if n > MAX_EXHAUSTIVE_NODES {
        return Err(Error::TooManyNodes {
            count: n,
            max: MAX_EXHAUSTIVE_NODES,
        });
    }

    let mut best: Option<Tour> = None;
    let mut checked = 0usize;

    for order in (1..n).permutations(n - 1) {
        checked += 1;
        let length = distances.at(0, order[0])
            + order
                .iter()
                .tuple_windows()
                .map(|(&a, &b)| distances.at(a, b))
                .sum::<f64>()
            + distances.at(order[order.len() - 1], 0);

        if best.as_ref().map_or(true, |b| length < b.length) {
            let mut nodes = Vec::with_capacity(n + 1);
            nodes.push(0);
            nodes.extend(order);
            nodes.push(0);
            best = Some(Tour::new(nodes, length));
        }
    }

    debug!("exhaustive search checked {} tours", checked);
    best.ok_or(Error::TooFewNodes { count: n })
}
