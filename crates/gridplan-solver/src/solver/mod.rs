pub mod config;
pub mod error;
pub mod maps;
pub mod policy;
pub mod value_iteration;

#[cfg(test)]
mod tests;
