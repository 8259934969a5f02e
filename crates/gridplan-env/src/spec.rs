use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Coordinate, GridError, GridWorld};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable grid-world schema used for YAML IO and validation.
pub struct GridSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
    /// Reward collected in every ordinary (non-terminal) cell.
    #[serde(default)]
    pub step_reward: f64,
    /// Probability mass diverted from the intended move, split evenly
    /// between the two perpendicular directions.
    #[serde(default)]
    pub slip: f64,
    /// Cells that cannot be occupied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked: Vec<Coordinate>,
    /// The absorbing goal cell.
    pub positive_terminal: TerminalSpec,
    /// The absorbing penalty cell.
    pub negative_terminal: TerminalSpec,
    /// Per-cell overrides of `step_reward`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rewards: Vec<CellReward>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// An absorbing cell and its fixed reward.
pub struct TerminalSpec {
    pub coord: Coordinate,
    pub reward: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A reward override for one cell.
pub struct CellReward {
    pub coord: Coordinate,
    pub reward: f64,
}

impl GridSpec {
    /// Validate dimensions, slip, blocked cells, terminals, and rewards.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.slip.is_nan() || !(0.0..=1.0).contains(&self.slip) {
            return Err(GridError::SlipOutOfRange { value: self.slip });
        }

        if !self.step_reward.is_finite() {
            return Err(GridError::NonFiniteReward {
                context: "step_reward".to_string(),
                value: self.step_reward,
            });
        }

        // Blocked cells must be in bounds and unique.
        let mut blocked = HashSet::with_capacity(self.blocked.len());
        for &coord in &self.blocked {
            if !self.in_bounds(coord) {
                return Err(GridError::BlockedOutOfBounds {
                    coord,
                    width: self.width,
                    height: self.height,
                });
            }
            if !blocked.insert(coord) {
                return Err(GridError::DuplicateBlockedCell { coord });
            }
        }

        for (kind, terminal) in [
            ("positive", &self.positive_terminal),
            ("negative", &self.negative_terminal),
        ] {
            if !self.in_bounds(terminal.coord) {
                return Err(GridError::TerminalOutOfBounds {
                    kind,
                    coord: terminal.coord,
                    width: self.width,
                    height: self.height,
                });
            }
            if blocked.contains(&terminal.coord) {
                return Err(GridError::TerminalBlocked {
                    kind,
                    coord: terminal.coord,
                });
            }
            if !terminal.reward.is_finite() {
                return Err(GridError::NonFiniteReward {
                    context: format!("{kind} terminal"),
                    value: terminal.reward,
                });
            }
        }

        if self.positive_terminal.coord == self.negative_terminal.coord {
            return Err(GridError::TerminalsCoincide {
                coord: self.positive_terminal.coord,
            });
        }

        for cell in &self.rewards {
            if !self.in_bounds(cell.coord) {
                return Err(GridError::RewardOutOfBounds {
                    coord: cell.coord,
                    width: self.width,
                    height: self.height,
                });
            }
            if blocked.contains(&cell.coord) {
                return Err(GridError::RewardOnBlockedCell { coord: cell.coord });
            }
            if cell.coord == self.positive_terminal.coord
                || cell.coord == self.negative_terminal.coord
            {
                return Err(GridError::RewardShadowsTerminal { coord: cell.coord });
            }
            if !cell.reward.is_finite() {
                return Err(GridError::NonFiniteReward {
                    context: format!("cell {}", cell.coord),
                    value: cell.reward,
                });
            }
        }

        Ok(())
    }

    /// Compile this spec into the runtime representation.
    pub fn compile(&self) -> Result<GridWorld, GridError> {
        GridWorld::from_spec(self)
    }

    pub(crate) fn in_bounds(&self, coord: Coordinate) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }
}
