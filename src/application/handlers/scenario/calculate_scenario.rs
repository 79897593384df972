//! CalculateScenarioHandler - Runs assessment, feasibility and the engine.

use serde::Serialize;
use std::sync::Arc;

use super::service::ScenarioService;
use crate::domain::efficiency::{
    AssessmentResponses, AvoidanceProfile, CalculationOutcome, CalculationRequest,
    CurrentMaturity, FeasibilityEvaluator, FeasibilityResult, IndustryBenchmarks,
    InitiativePortfolio, MaturityAssessor, PhaseAllocation, RiskWeights, ScenarioConfig,
    DEFAULT_BLENDED_RATE, DEFAULT_TOTAL_HOURS,
};
use crate::domain::foundation::DomainError;

/// Query describing one what-if scenario.
#[derive(Debug, Clone)]
pub struct CalculateScenarioQuery {
    pub responses: AssessmentResponses,
    pub target_percentage: f64,
    pub total_hours: f64,
    pub blended_rate: f64,
    pub allocation: PhaseAllocation,
    pub portfolio: InitiativePortfolio,
    pub benchmarks: IndustryBenchmarks,
    pub avoidance_profile: AvoidanceProfile,
    pub risk_weights: RiskWeights,
}

impl Default for CalculateScenarioQuery {
    fn default() -> Self {
        Self {
            responses: AssessmentResponses::defaults(),
            target_percentage: 15.0,
            total_hours: DEFAULT_TOTAL_HOURS,
            blended_rate: DEFAULT_BLENDED_RATE,
            allocation: PhaseAllocation::default(),
            portfolio: InitiativePortfolio::default(),
            benchmarks: IndustryBenchmarks::default(),
            avoidance_profile: AvoidanceProfile::default(),
            risk_weights: RiskWeights::default(),
        }
    }
}

/// Everything produced for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateScenarioResult {
    pub maturity: CurrentMaturity,
    pub feasibility: FeasibilityResult,
    #[serde(flatten)]
    pub outcome: CalculationOutcome,
}

/// Handler for scenario calculation.
///
/// Feasibility is advisory: an infeasible target is still calculated.
pub struct CalculateScenarioHandler {
    service: Arc<ScenarioService>,
}

impl CalculateScenarioHandler {
    pub fn new(service: Arc<ScenarioService>) -> Self {
        Self { service }
    }

    pub fn handle(&self, query: CalculateScenarioQuery) -> Result<CalculateScenarioResult, DomainError> {
        let engine = self.service.engine()?;

        let maturity = MaturityAssessor::assess(&query.responses);
        let feasibility = FeasibilityEvaluator::evaluate(
            &maturity,
            query.target_percentage,
            &query.portfolio.selected(),
        );
        let scenario = ScenarioConfig::try_new(query.target_percentage, maturity.clone())?
            .with_feasibility(feasibility.clone());

        let request = CalculationRequest {
            total_hours: query.total_hours,
            blended_rate: query.blended_rate,
            allocation: query.allocation,
            portfolio: query.portfolio,
            scenario,
            benchmarks: query.benchmarks,
            avoidance_profile: query.avoidance_profile,
            risk_weights: query.risk_weights,
        };
        let outcome = engine.calculate(&request)?;

        Ok(CalculateScenarioResult {
            maturity,
            feasibility,
            outcome,
        })
    }
}
