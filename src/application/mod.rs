//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every impact model operation is a read-only query.

pub mod handlers;

pub use handlers::scenario::{
    AssessMaturityHandler, AssessMaturityQuery, CalculateScenarioHandler, CalculateScenarioQuery,
    CalculateScenarioResult, EvaluateFeasibilityHandler, EvaluateFeasibilityQuery,
    GetCatalogHandler, ScenarioService,
};
