use crate::{CellReward, Coordinate, GridError, GridSpec, GridWorld, TerminalSpec};

#[derive(Debug, Clone)]
/// Struct to build grid worlds programmatically
pub struct GridBuilder {
    width: i32,
    height: i32,
    step_reward: f64,
    slip: f64,
    blocked: Vec<Coordinate>,
    positive_terminal: Option<TerminalSpec>,
    negative_terminal: Option<TerminalSpec>,
    rewards: Vec<CellReward>,
}

impl GridBuilder {
    /// Create a builder for a `width` x `height` grid.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            step_reward: 0.0,
            slip: 0.0,
            blocked: Vec::new(),
            positive_terminal: None,
            negative_terminal: None,
            rewards: Vec::new(),
        }
    }

    /// Set the reward collected in ordinary cells.
    pub fn step_reward(&mut self, reward: f64) -> &mut Self {
        self.step_reward = reward;
        self
    }

    /// Set the probability mass diverted to perpendicular moves.
    pub fn slip(&mut self, slip: f64) -> &mut Self {
        self.slip = slip;
        self
    }

    /// Mark a cell as blocked.
    pub fn block(&mut self, x: i32, y: i32) -> Result<&mut Self, GridError> {
        let coord = self.checked(x, y)?;
        self.blocked.push(coord);
        Ok(self)
    }

    /// Place the absorbing goal cell.
    pub fn positive_terminal(&mut self, x: i32, y: i32, reward: f64) -> Result<&mut Self, GridError> {
        let coord = self.checked(x, y)?;
        self.positive_terminal = Some(TerminalSpec { coord, reward });
        Ok(self)
    }

    /// Place the absorbing penalty cell.
    pub fn negative_terminal(&mut self, x: i32, y: i32, reward: f64) -> Result<&mut Self, GridError> {
        let coord = self.checked(x, y)?;
        self.negative_terminal = Some(TerminalSpec { coord, reward });
        Ok(self)
    }

    /// Override the step reward for one cell.
    pub fn reward(&mut self, x: i32, y: i32, reward: f64) -> Result<&mut Self, GridError> {
        let coord = self.checked(x, y)?;
        self.rewards.push(CellReward { coord, reward });
        Ok(self)
    }

    pub fn build_spec(self) -> Result<GridSpec, GridError> {
        let positive_terminal = self
            .positive_terminal
            .ok_or(GridError::MissingTerminal { kind: "positive" })?;
        let negative_terminal = self
            .negative_terminal
            .ok_or(GridError::MissingTerminal { kind: "negative" })?;

        let spec = GridSpec {
            version: Some(1),
            width: self.width,
            height: self.height,
            step_reward: self.step_reward,
            slip: self.slip,
            blocked: self.blocked,
            positive_terminal,
            negative_terminal,
            rewards: self.rewards,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn compile(self) -> Result<GridWorld, GridError> {
        let spec = self.build_spec()?;
        spec.compile()
    }

    fn checked(&self, x: i32, y: i32) -> Result<Coordinate, GridError> {
        let coord = Coordinate::new(x, y);
        if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
            Ok(coord)
        } else {
            Err(GridError::BuilderCellOutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }
}
