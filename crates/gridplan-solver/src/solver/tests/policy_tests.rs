use gridplan_env::{Coordinate, Direction, GridBuilder};

use crate::solver::tests::fixtures::{corridor, four_by_three};
use crate::{SolverConfig, extract_policy, solve};

fn config(gamma: f64) -> SolverConfig {
    SolverConfig {
        gamma,
        epsilon: 1e-6,
        max_sweeps: 10_000,
    }
}

#[test]
fn corridor_policy_points_at_the_goal() {
    let world = corridor();
    let cfg = config(0.9);
    let utilities = solve(&world, &cfg).expect("solve should converge");
    let policy = extract_policy(&utilities, &world).expect("extraction should succeed");

    assert_eq!(policy.get(Coordinate::new(0, 0)), Some(Direction::East));
    assert_eq!(policy.get(Coordinate::new(1, 0)), Some(Direction::East));
}

#[test]
fn policy_covers_terminals_for_interface_uniformity() {
    let world = four_by_three();
    let cfg = config(0.95);
    let utilities = solve(&world, &cfg).expect("solve should converge");
    let policy = extract_policy(&utilities, &world).expect("extraction should succeed");

    assert_eq!(policy.len(), utilities.len());
    assert!(policy.get(world.positive_terminal()).is_some());
    assert!(policy.get(world.negative_terminal()).is_some());
}

#[test]
fn extraction_is_deterministic() {
    let world = four_by_three();
    let cfg = config(0.95);
    let utilities = solve(&world, &cfg).expect("solve should converge");

    let first = extract_policy(&utilities, &world).expect("extraction should succeed");
    let second = extract_policy(&utilities, &world).expect("extraction should succeed");

    assert_eq!(first, second);
}

#[test]
fn ties_resolve_to_the_earliest_cardinal_direction() {
    // Both corridor ends pay +1, so east and west look identical from the
    // middle cell. East precedes west in the cardinal order and must win.
    let mut builder = GridBuilder::new(3, 1);
    builder.positive_terminal(0, 0, 1.0).expect("in bounds");
    builder.negative_terminal(2, 0, 1.0).expect("in bounds");
    let world = builder.compile().expect("world compiles");

    let utilities = solve(&world, &config(0.9)).expect("solve should converge");
    let policy = extract_policy(&utilities, &world).expect("extraction should succeed");

    assert_eq!(policy.get(Coordinate::new(1, 0)), Some(Direction::East));
}

#[test]
fn risky_cell_avoids_stepping_into_the_penalty() {
    let world = four_by_three();
    let cfg = config(0.95);
    let utilities = solve(&world, &cfg).expect("solve should converge");
    let policy = extract_policy(&utilities, &world).expect("extraction should succeed");

    // (2, 1) sits directly west of the -1 terminal.
    assert_ne!(policy.get(Coordinate::new(2, 1)), Some(Direction::East));
    // The cell west of the +1 terminal walks straight in.
    assert_eq!(policy.get(Coordinate::new(2, 0)), Some(Direction::East));
}
