mod solver;

pub use solver::config::{SolverConfig, SolverConfigError};
pub use solver::error::SolveError;
pub use solver::maps::{PolicyMap, UtilityMap};
pub use solver::policy::extract_policy;
pub use solver::value_iteration::{SolveMetrics, solve, solve_from, solve_with_metrics};
