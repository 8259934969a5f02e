mod builder;
mod coord;
mod env;
mod error;
mod grid;
mod io;
mod simulator;
mod spec;

pub use builder::GridBuilder;
pub use coord::{Coordinate, Direction};
pub use env::Environment;
pub use error::GridError;
pub use grid::GridWorld;
pub use io::{compile_yaml, load_yaml, save_yaml};
pub use simulator::GridSimulator;
pub use spec::{CellReward, GridSpec, TerminalSpec};
