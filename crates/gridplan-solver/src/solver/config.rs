use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_SOLVER_CONFIG_YAML: &str = include_str!("../../config/solver.default.yaml");

/// Configuration for the value-iteration fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Discount factor applied to future utility, in `(0, 1]`.
    pub gamma: f64,
    /// Convergence tolerance for the per-sweep utility delta.
    pub epsilon: f64,
    /// Sanity bound on the number of sweeps before giving up.
    pub max_sweeps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            gamma: 0.9,
            epsilon: 1e-6,
            max_sweeps: 10_000,
        }
    }
}

impl SolverConfig {
    /// Parse a solver config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SolverConfigError> {
        let config: SolverConfig = serde_yaml::from_str(yaml).map_err(SolverConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a solver config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SolverConfigError> {
        let yaml = fs::read_to_string(path).map_err(SolverConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SOLVER_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SolverConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Validate field ranges. A gamma of exactly 1 is legal; the solver
    /// switches to an absolute stopping bound for it instead of the
    /// contraction-based one, which degenerates to zero there.
    pub fn validate(&self) -> Result<(), SolverConfigError> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 || self.gamma > 1.0 {
            return Err(SolverConfigError::Invalid(
                "gamma must be finite and within (0, 1]".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SolverConfigError::Invalid(
                "epsilon must be finite and greater than 0".to_string(),
            ));
        }
        if self.max_sweeps == 0 {
            return Err(SolverConfigError::Invalid(
                "max_sweeps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// The delta threshold below which a sweep counts as converged.
    pub(crate) fn stopping_bound(&self) -> f64 {
        if self.gamma == 1.0 {
            self.epsilon
        } else {
            self.epsilon * (1.0 - self.gamma) / self.gamma
        }
    }
}

/// Error type for loading and validating `SolverConfig`.
#[derive(Debug)]
pub enum SolverConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for SolverConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            SolverConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            SolverConfigError::Invalid(err) => write!(f, "invalid solver config: {err}"),
        }
    }
}

impl std::error::Error for SolverConfigError {}
