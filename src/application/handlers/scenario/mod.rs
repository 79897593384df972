//! Scenario query handlers.
//!
//! Read-only handlers over the impact model. Only scenario calculation
//! needs the loaded engine held by `ScenarioService`.

mod assess_maturity;
mod calculate_scenario;
mod catalog;
mod evaluate_feasibility;
mod service;

pub use assess_maturity::{AssessMaturityHandler, AssessMaturityQuery, AssessMaturityResult};
pub use calculate_scenario::{
    CalculateScenarioHandler, CalculateScenarioQuery, CalculateScenarioResult,
};
pub use catalog::{
    AvoidanceProfileEntry, Catalog, CatalogDefaults, GetCatalogHandler, InitiativeEntry,
    PhaseEntry, QuestionEntry, RiskGuidance, RiskScaleEntry,
};
pub use evaluate_feasibility::{
    EvaluateFeasibilityHandler, EvaluateFeasibilityQuery, EvaluateFeasibilityResult,
};
pub use service::ScenarioService;
