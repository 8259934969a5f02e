use std::{fs, path::Path};

use crate::{GridError, GridSpec, GridWorld};

/// Load a grid spec from YAML on disk.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<GridSpec, GridError> {
    let yaml = fs::read_to_string(path)?;
    let spec: GridSpec = serde_yaml::from_str(&yaml)?;
    Ok(spec)
}

/// Load and compile a grid world from a YAML file.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<GridWorld, GridError> {
    let spec = load_yaml(path)?;
    spec.compile()
}

/// Serialize and write a grid spec to YAML.
pub fn save_yaml(path: impl AsRef<Path>, spec: &GridSpec) -> Result<(), GridError> {
    let yaml = serde_yaml::to_string(spec)?;
    fs::write(path, yaml)?;
    Ok(())
}
