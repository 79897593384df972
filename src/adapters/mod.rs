//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API over the scenario handlers
//! - `matrix` - Impact matrix sources (built-in seed, YAML file)

pub mod http;
pub mod matrix;

pub use matrix::{SeedMatrixSource, YamlMatrixSource};
