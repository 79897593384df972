//! Impact Matrix Source Adapters
//!
//! - **SeedMatrixSource** - The compiled-in research sample
//! - **YamlMatrixSource** - A 7×7 matrix read from a YAML file

mod seed;
mod yaml_file;

pub use seed::SeedMatrixSource;
pub use yaml_file::YamlMatrixSource;
