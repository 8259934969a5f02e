use std::collections::HashMap;

use gridplan_env::{Coordinate, Direction, Environment};

use crate::solver::{config::SolverConfig, error::SolveError, maps::UtilityMap};

/// Per-run bookkeeping of one value-iteration fixed point.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveMetrics {
    /// Number of sweeps performed, including the converging one.
    pub sweeps: usize,
    /// Max absolute utility change of each sweep, in order.
    pub deltas: Vec<f64>,
}

/// Probability-weighted utility of attempting `direction` from `state`,
/// read entirely from the frozen `utilities` snapshot.
pub(crate) fn expected_utility(
    env: &impl Environment,
    utilities: &HashMap<Coordinate, f64>,
    state: Coordinate,
    direction: Direction,
) -> Result<f64, SolveError> {
    let mut acc = 0.0_f64;
    for (next, prob) in env.transitions(state, direction) {
        let next_utility =
            utilities
                .get(&next)
                .copied()
                .ok_or(SolveError::UnknownNextState {
                    state,
                    direction,
                    next,
                })?;
        acc += prob * next_utility;
    }
    Ok(acc)
}

/// Best Bellman backup over the four cardinal moves for a non-terminal state.
fn max_action_utility(
    env: &impl Environment,
    utilities: &HashMap<Coordinate, f64>,
    state: Coordinate,
) -> Result<f64, SolveError> {
    let mut best = f64::NEG_INFINITY;
    for direction in Direction::CARDINAL {
        let action_utility = expected_utility(env, utilities, state, direction)?;
        best = best.max(action_utility);
    }
    Ok(best)
}

/// Run value iteration from an all-zero utility map.
pub fn solve(env: &impl Environment, config: &SolverConfig) -> Result<UtilityMap, SolveError> {
    let zeros = env.states().into_iter().map(|s| (s, 0.0)).collect();
    solve_from(env, config, &UtilityMap::new(zeros))
}

/// Run value iteration from a caller-provided seed, e.g. a previously
/// converged map for a warm restart.
pub fn solve_from(
    env: &impl Environment,
    config: &SolverConfig,
    initial: &UtilityMap,
) -> Result<UtilityMap, SolveError> {
    let (utilities, _) = solve_with_metrics(env, config, initial)?;
    Ok(utilities)
}

/// Like `solve_from`, but also reports the per-sweep delta trace.
///
/// Sweeps are synchronous: each sweep writes a fresh map and reads only from
/// the previous one, so no state observes a partially-updated neighbor.
/// Terminal utilities are pinned to their rewards and never backed up.
pub fn solve_with_metrics(
    env: &impl Environment,
    config: &SolverConfig,
    initial: &UtilityMap,
) -> Result<(UtilityMap, SolveMetrics), SolveError> {
    config.validate().map_err(|err| SolveError::InvalidConfig {
        message: err.to_string(),
    })?;

    // The key set is fixed here and never changes: exactly the non-blocked
    // coordinates of the snapshot.
    let states = env.states();
    let mut utilities: HashMap<Coordinate, f64> = HashMap::with_capacity(states.len());
    for state in states {
        let seeded = initial
            .get(state)
            .ok_or(SolveError::SeedMissingState { state })?;
        utilities.insert(state, seeded);
    }

    let bound = config.stopping_bound();
    let mut deltas = Vec::new();

    for sweep in 1..=config.max_sweeps {
        let mut next: HashMap<Coordinate, f64> = HashMap::with_capacity(utilities.len());
        let mut delta = 0.0_f64;

        for (&state, &previous) in &utilities {
            let updated = if env.is_terminal(state) {
                env.reward(state)
            } else {
                env.reward(state) + config.gamma * max_action_utility(env, &utilities, state)?
            };

            delta = delta.max((updated - previous).abs());
            next.insert(state, updated);
        }

        utilities = next;
        deltas.push(delta);

        if delta <= bound {
            return Ok((
                UtilityMap::new(utilities),
                SolveMetrics {
                    sweeps: sweep,
                    deltas,
                },
            ));
        }
    }

    Err(SolveError::NonConvergence {
        sweeps: config.max_sweeps,
        delta: deltas.last().copied().unwrap_or(f64::INFINITY),
    })
}
