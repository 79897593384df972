//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod scenario;

// Re-export key types for convenience
pub use scenario::scenario_router;
pub use scenario::{ScenarioAppState, ScenarioDefaults};
