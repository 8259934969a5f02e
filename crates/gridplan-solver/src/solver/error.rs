use std::fmt;

use gridplan_env::{Coordinate, Direction};

/// Error type for value iteration and policy extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The environment returned a transition target outside the known state
    /// space, e.g. a blocked cell.
    UnknownNextState {
        state: Coordinate,
        direction: Direction,
        next: Coordinate,
    },
    /// A seed utility map is missing an entry for a state of the snapshot.
    SeedMissingState { state: Coordinate },
    /// The sweep guard tripped before the stopping criterion was met.
    NonConvergence { sweeps: usize, delta: f64 },
    /// The caller handed the solver a config that fails validation.
    InvalidConfig { message: String },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::UnknownNextState {
                state,
                direction,
                next,
            } => write!(
                f,
                "transition from {state} moving {direction} targets {next}, which is not in the state space"
            ),
            SolveError::SeedMissingState { state } => {
                write!(f, "seed utility map has no entry for state {state}")
            }
            SolveError::NonConvergence { sweeps, delta } => write!(
                f,
                "value iteration did not converge after {sweeps} sweeps (last delta {delta})"
            ),
            SolveError::InvalidConfig { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SolveError {}
