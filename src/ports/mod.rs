//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ImpactMatrixSource` - Supplies the seed impact matrix at startup

mod impact_matrix_source;

pub use impact_matrix_source::ImpactMatrixSource;
