//! Reporting helpers: timing, statistics, saving and terminal rendering.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::pheromone::PheromoneMatrix;
use crate::problem::Problem;
use crate::tour::Tour;

/// Format a duration as hours, minutes, and seconds with milliseconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    format!("{}h {:02}m {:02}.{:03}s", hours, minutes, seconds, millis)
}

/// Elapsed time in the console report's `<seconds> seconds.` form.
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.3} seconds.", duration.as_secs_f64())
}

/// Everything a finished run hands back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub instance: String,
    pub method: String,
    pub length: f64,
    /// Tour numbered from 1
    pub path: Vec<usize>,
    pub runtime_ms: u128,
    /// Present for ant colony runs only
    pub config: Option<Config>,
}

impl RunReport {
    pub fn new(
        problem: &Problem,
        method: impl Into<String>,
        tour: &Tour,
        runtime: Duration,
        config: Option<Config>,
    ) -> Self {
        RunReport {
            instance: problem.name.clone(),
            method: method.into(),
            length: tour.length,
            path: tour.one_based(),
            runtime_ms: runtime.as_millis(),
            config,
        }
    }
}

/// Save a report; paths ending in `.json` are written as JSON, others as text.
pub fn save_report<P: AsRef<Path>>(report: &RunReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);

    if path.extension().map_or(false, |ext| ext == "json") {
        serde_json::to_writer_pretty(&mut file, report)?;
        writeln!(file)?;
        return Ok(());
    }

    writeln!(file, "TSP Solution for instance: {}", report.instance)?;
    writeln!(file, "Method: {}", report.method)?;
    writeln!(file, "Total Distance: {:.6}", report.length)?;
    writeln!(file, "Path: {:?}", report.path)?;
    writeln!(
        file,
        "Runtime: {}",
        format_duration(Duration::from_millis(report.runtime_ms as u64))
    )?;

    if let Some(config) = &report.config {
        writeln!(file)?;
        writeln!(file, "Iterations: {}", config.iteration_count)?;
        writeln!(file, "Ants: {}", config.ant_count)?;
        writeln!(file, "Retain Fraction: {}", config.retain_fraction)?;
        writeln!(file, "Alpha: {}", config.alpha)?;
        writeln!(file, "Beta: {}", config.beta)?;
        writeln!(file, "Initial Pheromone: {}", config.initial_pheromone)?;
        writeln!(file, "Deposit Constant: {}", config.deposit_constant)?;
    }

    file.flush()?;
    Ok(())
}

/// Statistics about an ant colony run.
pub struct RunStatistics {
    pub iterations: usize,
    pub ants_per_iteration: usize,
    pub runtime: Duration,
    pub best_length: f64,
    pub first_iteration_best: f64,
    pub last_iteration_best: f64,
    pub improvements: usize,
}

impl RunStatistics {
    /// Summarise the per-iteration history of a run.
    pub fn from_history(
        iteration_best: &[f64],
        global_best: &[f64],
        ants_per_iteration: usize,
        runtime: Duration,
    ) -> Self {
        let improvements = global_best
            .iter()
            .enumerate()
            .filter(|&(i, &length)| i == 0 || length < global_best[i - 1])
            .count();

        RunStatistics {
            iterations: iteration_best.len(),
            ants_per_iteration,
            runtime,
            best_length: global_best.last().copied().unwrap_or(f64::INFINITY),
            first_iteration_best: iteration_best.first().copied().unwrap_or(f64::INFINITY),
            last_iteration_best: iteration_best.last().copied().unwrap_or(f64::INFINITY),
            improvements,
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Run Statistics:
- Iterations: {}
- Ants per Iteration: {}
- Runtime: {}
- Best Length: {:.6}
- First Iteration Best: {:.6}
- Last Iteration Best: {:.6}
- Improvements: {}",
            self.iterations,
            self.ants_per_iteration,
            format_duration(self.runtime),
            self.best_length,
            self.first_iteration_best,
            self.last_iteration_best,
            self.improvements
        )
    }
}

const GRID_WIDTH: usize = 80;
const GRID_HEIGHT: usize = 25;

/// Place every node on a character grid; returns the cell of each node.
fn grid_positions(problem: &Problem) -> Vec<(usize, usize)> {
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    for node in &problem.nodes {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
        max_x = max_x.max(node.x);
        max_y = max_y.max(node.y);
    }

    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);

    problem
        .nodes
        .iter()
        .map(|node| {
            let col = ((node.x - min_x) / span_x * (GRID_WIDTH as f64 - 1.0)) as usize;
            // Flip so larger y is drawn higher up.
            let row = ((max_y - node.y) / span_y * (GRID_HEIGHT as f64 - 1.0)) as usize;
            (row, col)
        })
        .collect()
}

/// Render the cities, labelled by their position in the tour.
pub fn render_tour(problem: &Problem, tour: &Tour) -> String {
    let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];
    let positions = grid_positions(problem);
    let symbols: Vec<char> = ('0'..='9').chain('a'..='z').chain('A'..='Z').collect();

    for (order, &node) in tour.nodes[..tour.city_count()].iter().enumerate() {
        if let Some(&(row, col)) = positions.get(node) {
            grid[row][col] = if order == 0 {
                '*'
            } else {
                symbols[order % symbols.len()]
            };
        }
    }

    let mut out = String::new();
    out.push_str(&format!("Tour for {}\n", problem.name));
    out.push_str(&format!("Total Distance: {:.6}\n\n", tour.length));
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str("\nLegend: * - start, then visiting order 1-9, a-z, A-Z (wrapping)\n");
    out
}

/// Print the tour rendering to the console.
pub fn print_tour_visualization(problem: &Problem, tour: &Tour) {
    println!("{}", render_tour(problem, tour));
}

/// Render the cities labelled by their 1-based index, as drawn under the
/// pheromone trails.
pub fn render_cities(problem: &Problem) -> String {
    let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];

    for (node, (row, col)) in grid_positions(problem).into_iter().enumerate() {
        let label = (node + 1).to_string();
        // Labels near the right edge are shifted left so they stay whole.
        let start = col.min(GRID_WIDTH.saturating_sub(label.len()));
        for (offset, ch) in label.chars().enumerate() {
            grid[row][start + offset] = ch;
        }
    }

    let mut out = String::new();
    out.push_str(&format!("Cities of {}\n\n", problem.name));
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Render the `top` strongest undirected edges with bars scaled to the strongest.
pub fn render_pheromones(problem: &Problem, pheromones: &PheromoneMatrix, top: usize) -> String {
    let n = pheromones.len();
    let mut edges: Vec<(usize, usize, f64)> = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let level = pheromones.at(i, j).max(pheromones.at(j, i));
            edges.push((i, j, level));
        }
    }
    edges.sort_by(|a, b| b.2.total_cmp(&a.2));

    let strongest = pheromones.max().unwrap_or(0.0);
    let bar_width = 40.0;

    let mut out = String::new();
    out.push_str(&format!("Pheromone trails for {}\n", problem.name));
    for &(i, j, level) in edges.iter().take(top) {
        let filled = if strongest > 0.0 {
            ((level / strongest) * bar_width).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:>4} - {:<4} {:>12.6e} {}\n",
            i + 1,
            j + 1,
            level,
            "#".repeat(filled)
        ));
    }
    out
}

/// Print the city grid followed by the pheromone rendering.
pub fn print_pheromone_visualization(problem: &Problem, pheromones: &PheromoneMatrix, top: usize) {
    println!("{}", render_cities(problem));
    println!("{}", render_pheromones(problem, pheromones, top));
}
