//! Efficiency Engine - Runs the full scenario pipeline.
//!
//! The engine owns the immutable impact matrix and is otherwise stateless:
//! every call builds its own effective matrix and result set, so a single
//! instance can be shared freely between threads.

use serde::Serialize;

use super::benchmarks::IndustryBenchmarks;
use super::costs::{AvoidanceProfile, CostEngine, CostResult};
use super::impact_matrix::{DeltaMatrix, ImpactMatrix};
use super::portfolio::{InitiativePortfolio, MaturityScaler};
use super::projection::{PhaseAllocation, PhaseHours, PhaseProjector};
use super::reporting::{
    CredibilityWarning, InitiativeImpactRow, KpiSummary, PhaseSummaryRow, ReportAggregator,
    DEFAULT_MAX_CREDIBLE_COST_REDUCTION,
};
use super::risk::{RiskAdjuster, RiskWeights};
use super::scenario::{ScenarioConfig, ScenarioScaler};
use crate::domain::foundation::{DomainError, PhaseValues, ValidationError};

/// Default project size in hours.
pub const DEFAULT_TOTAL_HOURS: f64 = 17054.0;
/// Default blended hourly rate.
pub const DEFAULT_BLENDED_RATE: f64 = 100.0;

/// Everything needed for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub total_hours: f64,
    pub blended_rate: f64,
    pub allocation: PhaseAllocation,
    pub portfolio: InitiativePortfolio,
    pub scenario: ScenarioConfig,
    pub benchmarks: IndustryBenchmarks,
    pub avoidance_profile: AvoidanceProfile,
    pub risk_weights: RiskWeights,
}

impl CalculationRequest {
    /// Creates a request for `scenario` with default project parameters.
    pub fn new(scenario: ScenarioConfig) -> Self {
        Self {
            total_hours: DEFAULT_TOTAL_HOURS,
            blended_rate: DEFAULT_BLENDED_RATE,
            allocation: PhaseAllocation::default(),
            portfolio: InitiativePortfolio::default(),
            scenario,
            benchmarks: IndustryBenchmarks::default(),
            avoidance_profile: AvoidanceProfile::default(),
            risk_weights: RiskWeights::default(),
        }
    }

    /// Checks value ranges the engine relies on.
    ///
    /// Allocation totals are not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range("total_hours", self.total_hours, 0.0, f64::MAX)?;
        ValidationError::check_range("blended_rate", self.blended_rate, 0.0, f64::MAX)?;
        self.portfolio.validate()?;
        self.benchmarks.validate()?;
        Ok(())
    }
}

/// Full output of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    pub scenario_description: String,
    pub effective_deltas: DeltaMatrix,
    pub hours: PhaseHours,
    pub costs: CostResult,
    pub risk_adjusted_hours: PhaseValues,
    pub phase_summary: Vec<PhaseSummaryRow>,
    pub initiative_impact: Vec<InitiativeImpactRow>,
    pub kpis: KpiSummary,
    pub warnings: Vec<CredibilityWarning>,
}

/// The impact model calculation engine.
#[derive(Debug, Clone)]
pub struct EfficiencyEngine {
    matrix: ImpactMatrix,
    max_credible_cost_reduction: f64,
}

impl EfficiencyEngine {
    /// Creates an engine over a loaded matrix.
    pub fn new(matrix: ImpactMatrix) -> Self {
        Self {
            matrix,
            max_credible_cost_reduction: DEFAULT_MAX_CREDIBLE_COST_REDUCTION,
        }
    }

    /// Overrides the credibility threshold (fraction of baseline cost).
    pub fn with_credibility_limit(mut self, limit: f64) -> Self {
        self.max_credible_cost_reduction = limit;
        self
    }

    pub fn matrix(&self) -> &ImpactMatrix {
        &self.matrix
    }

    pub fn credibility_limit(&self) -> f64 {
        self.max_credible_cost_reduction
    }

    /// Builds the effective delta matrix for a request.
    pub fn effective_deltas(&self, request: &CalculationRequest) -> DeltaMatrix {
        let matured = MaturityScaler::apply(&self.matrix, &request.portfolio);
        let baseline_hours = request.allocation.baseline_hours(request.total_hours);
        ScenarioScaler::apply(
            &matured,
            &request.scenario,
            &request.benchmarks,
            &baseline_hours,
        )
    }

    /// Runs the pipeline end to end.
    ///
    /// # Errors
    /// Returns a validation error for out-of-range request values.
    pub fn calculate(&self, request: &CalculationRequest) -> Result<CalculationOutcome, DomainError> {
        request.validate()?;

        let effective = self.effective_deltas(request);
        let hours = PhaseProjector::project(request.total_hours, &request.allocation, &effective);
        let costs = CostEngine::calculate(&hours, request.blended_rate, request.avoidance_profile);
        let risk_adjusted_hours = RiskAdjuster::adjust(&hours.modeled, &request.risk_weights);

        let phase_summary = ReportAggregator::phase_summary(&hours, &costs, &risk_adjusted_hours);
        let initiative_impact = ReportAggregator::initiative_impact(
            &self.matrix,
            &effective,
            &request.portfolio,
            request.blended_rate,
            request.avoidance_profile,
        );
        let kpis = ReportAggregator::kpis(&hours, &costs);

        let warnings: Vec<CredibilityWarning> =
            ReportAggregator::credibility_check(&kpis, self.max_credible_cost_reduction)
                .into_iter()
                .collect();
        for warning in &warnings {
            tracing::warn!(
                cost_reduction = warning.cost_reduction,
                limit = warning.limit,
                "Projected cost reduction exceeds credible limit"
            );
        }

        tracing::debug!(
            target_percentage = request.scenario.target_percentage(),
            total_hours = request.total_hours,
            hours_saved = kpis.total_hours_saved,
            financial_benefit = kpis.total_financial_benefit,
            "Scenario calculated"
        );

        Ok(CalculationOutcome {
            scenario_description: request.scenario.description().to_string(),
            effective_deltas: effective,
            hours,
            costs,
            risk_adjusted_hours,
            phase_summary,
            initiative_impact,
            kpis,
            warnings,
        })
    }
}
