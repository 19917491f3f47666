//! Unit tests for the pheromone matrix and the update rules.

use aco_tsp::pheromone::PheromoneMatrix;
use aco_tsp::tour::Tour;
use aco_tsp::update::{EvaporationRule, ReinforcementRule};

#[test]
fn test_initial_levels() {
    let matrix = PheromoneMatrix::new(5, 0.11);

    assert_eq!(matrix.len(), 5);
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(matrix.get(i, j).unwrap(), 0.11);
        }
    }
    assert_eq!(matrix.max(), Some(0.11));
    assert_eq!(matrix.min(), Some(0.11));
}

#[test]
fn test_reinforce_is_additive_and_directed() {
    let mut matrix = PheromoneMatrix::new(4, 0.5);

    matrix.reinforce(1, 2, 0.25).unwrap();
    matrix.reinforce(1, 2, 0.25).unwrap();

    assert!((matrix.get(1, 2).unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(matrix.get(2, 1).unwrap(), 0.5);
    assert!(matrix.reinforce(4, 0, 1.0).is_err());
    assert!(matrix.get(0, 4).is_err());
}

#[test]
fn test_evaporation_scales_every_entry() {
    let mut matrix = PheromoneMatrix::new(6, 0.11);
    matrix.reinforce(0, 3, 0.7).unwrap();
    matrix.reinforce(3, 0, 0.7).unwrap();
    matrix.reinforce(5, 2, 0.013).unwrap();
    matrix.reinforce(4, 4, 2.0).unwrap();

    let before = matrix.snapshot();
    matrix.evaporate(0.9);
    let after = matrix.snapshot();

    for i in 0..6 {
        for j in 0..6 {
            assert!(
                (after[i][j] - before[i][j] * 0.9).abs() < 1e-15,
                "entry ({}, {}) was not decayed",
                i,
                j
            );
            assert!(after[i][j] < before[i][j]);
        }
    }
}

#[test]
fn test_evaporation_keeps_levels_positive() {
    let mut matrix = PheromoneMatrix::new(3, 1.0);
    for _ in 0..500 {
        matrix.evaporate(0.5);
    }
    assert!(matrix.min().unwrap() > 0.0);
}

#[test]
fn test_snapshot_shape() {
    let mut matrix = PheromoneMatrix::new(3, 1.0);
    matrix.reinforce(2, 0, 4.0).unwrap();

    let snapshot = matrix.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert!(snapshot.iter().all(|row| row.len() == 3));
    assert_eq!(snapshot[2][0], 5.0);
    assert_eq!(matrix.max(), Some(5.0));
    assert!(PheromoneMatrix::new(0, 1.0).snapshot().is_empty());
}

#[test]
fn test_max_ignores_diagonal() {
    let mut matrix = PheromoneMatrix::new(3, 1.0);
    matrix.reinforce(1, 1, 10.0).unwrap();
    assert_eq!(matrix.max(), Some(1.0));
}

#[test]
fn test_reinforcement_rule_deposits_on_both_directions() {
    let mut matrix = PheromoneMatrix::new(4, 0.1);
    let tour = Tour::new(vec![0, 2, 1, 3, 0], 8.0);
    let rule = ReinforcementRule::new(2.0);

    rule.apply(&tour, &mut matrix).unwrap();

    let delta = rule.delta(8.0);
    assert_eq!(delta, 0.25);
    for (u, v) in [(0, 2), (2, 1), (1, 3), (3, 0)] {
        assert!((matrix.get(u, v).unwrap() - 0.35).abs() < 1e-12);
        assert!((matrix.get(v, u).unwrap() - 0.35).abs() < 1e-12);
    }
    // Edges off the tour are untouched.
    assert_eq!(matrix.get(0, 1).unwrap(), 0.1);
    assert_eq!(matrix.get(2, 3).unwrap(), 0.1);
}

#[test]
fn test_shorter_tours_deposit_more() {
    let rule = ReinforcementRule::new(1.0);
    assert!(rule.delta(2.0) > rule.delta(3.0));
}

#[test]
fn test_reinforcement_skips_zero_length_tour() {
    let mut matrix = PheromoneMatrix::new(2, 0.1);
    let tour = Tour::new(vec![0, 1, 0], 0.0);

    ReinforcementRule::new(1.0).apply(&tour, &mut matrix).unwrap();
    assert_eq!(matrix.max(), Some(0.1));
}

#[test]
fn test_reinforcement_rejects_foreign_tour() {
    let mut matrix = PheromoneMatrix::new(3, 0.1);
    let tour = Tour::new(vec![0, 5, 0], 2.0);
    assert!(ReinforcementRule::new(1.0).apply(&tour, &mut matrix).is_err());
}

#[test]
fn test_evaporation_rule() {
    let mut matrix = PheromoneMatrix::new(3, 2.0);
    EvaporationRule::new(0.25).apply(&mut matrix);
    assert_eq!(matrix.max(), Some(0.5));
    assert_eq!(matrix.min(), Some(0.5));
}
