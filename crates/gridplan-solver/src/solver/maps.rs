use std::collections::HashMap;

use gridplan_env::{Coordinate, Direction};

/// Converged state utilities, keyed by coordinate. Constructed by the solver
/// and read-only afterwards; its key set is exactly the non-blocked
/// coordinates of the snapshot it was solved against.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityMap {
    utilities: HashMap<Coordinate, f64>,
}

impl UtilityMap {
    pub(crate) fn new(utilities: HashMap<Coordinate, f64>) -> Self {
        Self { utilities }
    }

    /// Utility of a state, if it is part of the snapshot.
    pub fn get(&self, coord: Coordinate) -> Option<f64> {
        self.utilities.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.utilities.contains_key(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, f64)> + '_ {
        self.utilities.iter().map(|(&c, &u)| (c, u))
    }

    pub fn len(&self) -> usize {
        self.utilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
    }

    pub(crate) fn inner(&self) -> &HashMap<Coordinate, f64> {
        &self.utilities
    }
}

/// Greedy action per state, derived from a converged utility map. Covers the
/// same key set as the utilities it was extracted from, terminals included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyMap {
    actions: HashMap<Coordinate, Direction>,
}

impl PolicyMap {
    pub(crate) fn new(actions: HashMap<Coordinate, Direction>) -> Self {
        Self { actions }
    }

    /// Chosen direction for a state, if it is part of the snapshot.
    pub fn get(&self, coord: Coordinate) -> Option<Direction> {
        self.actions.get(&coord).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Direction)> + '_ {
        self.actions.iter().map(|(&c, &d)| (c, d))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
