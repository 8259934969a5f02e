use thiserror::Error;

use crate::Coordinate;

#[derive(Debug, Error)]
/// Error type for grid schema loading, validation, and builder operations.
pub enum GridError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("slip probability must be within [0, 1], got {value}")]
    SlipOutOfRange { value: f64 },

    #[error("reward for {context} must be finite, got {value}")]
    NonFiniteReward { context: String, value: f64 },

    #[error("blocked cell {coord} is outside the {width}x{height} grid")]
    BlockedOutOfBounds {
        coord: Coordinate,
        width: i32,
        height: i32,
    },

    #[error("blocked cell {coord} is declared more than once")]
    DuplicateBlockedCell { coord: Coordinate },

    #[error("missing {kind} terminal")]
    MissingTerminal { kind: &'static str },

    #[error("{kind} terminal {coord} is outside the {width}x{height} grid")]
    TerminalOutOfBounds {
        kind: &'static str,
        coord: Coordinate,
        width: i32,
        height: i32,
    },

    #[error("{kind} terminal {coord} sits on a blocked cell")]
    TerminalBlocked {
        kind: &'static str,
        coord: Coordinate,
    },

    #[error("positive and negative terminals both sit at {coord}")]
    TerminalsCoincide { coord: Coordinate },

    #[error("reward override at {coord} is outside the {width}x{height} grid")]
    RewardOutOfBounds {
        coord: Coordinate,
        width: i32,
        height: i32,
    },

    #[error("reward override at {coord} targets a blocked cell")]
    RewardOnBlockedCell { coord: Coordinate },

    #[error("reward override at {coord} shadows a terminal reward")]
    RewardShadowsTerminal { coord: Coordinate },

    #[error("builder referenced cell {coord} outside the {width}x{height} grid")]
    BuilderCellOutOfBounds {
        coord: Coordinate,
        width: i32,
        height: i32,
    },
}
