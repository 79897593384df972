//! Scenario HTTP adapter module.
//!
//! Provides REST API endpoints for maturity assessment and scenario calculation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ScenarioApiError, ScenarioAppState, ScenarioDefaults};
pub use routes::scenario_router;
