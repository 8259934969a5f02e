use std::collections::{HashMap, HashSet};

use crate::{Coordinate, Direction, Environment, GridError, GridSpec};

#[derive(Debug, Clone)]
/// Runtime form of a grid world with frozen blocked cells, rewards, and the
/// slip movement model.
pub struct GridWorld {
    width: i32,
    height: i32,
    step_reward: f64,
    slip: f64,
    blocked: HashSet<Coordinate>,
    positive_terminal: Coordinate,
    positive_reward: f64,
    negative_terminal: Coordinate,
    negative_reward: f64,
    reward_overrides: HashMap<Coordinate, f64>,
}

impl GridWorld {
    /// Compile and validate a spec into a frozen runtime snapshot.
    pub(crate) fn from_spec(spec: &GridSpec) -> Result<Self, GridError> {
        spec.validate()?;

        Ok(Self {
            width: spec.width,
            height: spec.height,
            step_reward: spec.step_reward,
            slip: spec.slip,
            blocked: spec.blocked.iter().copied().collect(),
            positive_terminal: spec.positive_terminal.coord,
            positive_reward: spec.positive_terminal.reward,
            negative_terminal: spec.negative_terminal.coord,
            negative_reward: spec.negative_terminal.reward,
            reward_overrides: spec
                .rewards
                .iter()
                .map(|cell| (cell.coord, cell.reward))
                .collect(),
        })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The absorbing goal cell.
    pub fn positive_terminal(&self) -> Coordinate {
        self.positive_terminal
    }

    /// The absorbing penalty cell.
    pub fn negative_terminal(&self) -> Coordinate {
        self.negative_terminal
    }

    /// Probability mass diverted to perpendicular moves.
    pub fn slip(&self) -> f64 {
        self.slip
    }

    fn in_bounds(&self, coord: Coordinate) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }

    /// Where a single attempted move actually lands: the neighbor, or the
    /// current cell when the neighbor is off-grid or blocked.
    fn resolve_move(&self, state: Coordinate, direction: Direction) -> Coordinate {
        let target = state.step(direction);
        if self.in_bounds(target) && !self.blocked.contains(&target) {
            target
        } else {
            state
        }
    }
}

impl Environment for GridWorld {
    fn states(&self) -> Vec<Coordinate> {
        let mut states = Vec::with_capacity((self.width * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let coord = Coordinate::new(x, y);
                if !self.blocked.contains(&coord) {
                    states.push(coord);
                }
            }
        }
        states
    }

    fn is_blocked(&self, coord: Coordinate) -> bool {
        !self.in_bounds(coord) || self.blocked.contains(&coord)
    }

    fn is_terminal(&self, coord: Coordinate) -> bool {
        coord == self.positive_terminal || coord == self.negative_terminal
    }

    fn reward(&self, coord: Coordinate) -> f64 {
        if coord == self.positive_terminal {
            return self.positive_reward;
        }
        if coord == self.negative_terminal {
            return self.negative_reward;
        }
        self.reward_overrides
            .get(&coord)
            .copied()
            .unwrap_or(self.step_reward)
    }

    fn transitions(&self, state: Coordinate, direction: Direction) -> Vec<(Coordinate, f64)> {
        let [left, right] = direction.perpendicular();
        let attempts = [
            (direction, 1.0 - self.slip),
            (left, self.slip / 2.0),
            (right, self.slip / 2.0),
        ];

        // Bounced moves fold their mass onto the current cell, so outcomes
        // landing on the same coordinate are merged.
        let mut outcomes: Vec<(Coordinate, f64)> = Vec::with_capacity(3);
        for (attempt, prob) in attempts {
            if prob == 0.0 {
                continue;
            }
            let dest = self.resolve_move(state, attempt);
            match outcomes.iter_mut().find(|(c, _)| *c == dest) {
                Some((_, mass)) => *mass += prob,
                None => outcomes.push((dest, prob)),
            }
        }
        outcomes
    }
}
