use crate::{Coordinate, Direction};

/// Read contract of an environment model consumed by the solver.
///
/// Implementations describe one frozen grid snapshot: nothing here mutates,
/// and `transitions` must behave as a pure function of `(state, direction)`.
pub trait Environment {
    /// All non-blocked coordinates of the grid, in a stable order.
    fn states(&self) -> Vec<Coordinate>;

    /// Return whether a cell cannot be occupied.
    fn is_blocked(&self, coord: Coordinate) -> bool;

    /// Return whether a cell is one of the two absorbing terminals.
    fn is_terminal(&self, coord: Coordinate) -> bool;

    /// Immediate reward for a state. Defined for every non-blocked cell,
    /// terminals included.
    fn reward(&self, coord: Coordinate) -> f64;

    /// Stochastic outcome distribution of attempting to move in `direction`
    /// from `state`, as `(next, probability)` pairs summing to 1. Defined for
    /// every non-blocked cell, terminals included.
    fn transitions(&self, state: Coordinate, direction: Direction) -> Vec<(Coordinate, f64)>;
}
