use std::collections::HashMap;

use gridplan_env::{Coordinate, Direction, Environment};

use crate::solver::{
    error::SolveError,
    maps::{PolicyMap, UtilityMap},
    value_iteration,
};

/// Derive the greedy policy from a converged utility map.
///
/// Directions are scanned in `Direction::CARDINAL` order and a candidate
/// replaces the incumbent only on a strictly greater expected utility, so
/// ties resolve to the earliest direction. Every coordinate in the utility
/// map gets an entry, terminals included; a rational agent never acts on the
/// terminal entries, but keeping them makes the policy's key set match the
/// utilities'.
pub fn extract_policy(
    utilities: &UtilityMap,
    env: &impl Environment,
) -> Result<PolicyMap, SolveError> {
    let mut actions: HashMap<Coordinate, Direction> = HashMap::with_capacity(utilities.len());

    for (state, _) in utilities.iter() {
        let mut best_utility = f64::NEG_INFINITY;
        let mut best_direction = Direction::CARDINAL[0];

        for direction in Direction::CARDINAL {
            let action_utility =
                value_iteration::expected_utility(env, utilities.inner(), state, direction)?;
            if action_utility > best_utility {
                best_utility = action_utility;
                best_direction = direction;
            }
        }

        actions.insert(state, best_direction);
    }

    Ok(PolicyMap::new(actions))
}
