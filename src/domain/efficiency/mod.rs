//! Efficiency domain - The process-efficiency impact model.
//!
//! Pipeline, leaves first:
//!
//! - `maturity` - Questionnaire scoring into a 1-5 maturity level
//! - `feasibility` - Target vs. realistic savings potential
//! - `portfolio` - Initiative settings and the maturity scaler
//! - `scenario` - Target-driven boosts and conservative caps
//! - `projection` - Baseline and modeled hours per phase
//! - `costs` - Costs, savings and post-launch avoidance
//! - `risk` - Risk-weighted hours
//! - `reporting` - Summary rows, initiative rows, KPIs, credibility check
//! - `engine` - Runs the whole pipeline over an immutable impact matrix

mod benchmarks;
mod costs;
mod engine;
mod feasibility;
mod impact_matrix;
mod maturity;
mod portfolio;
mod projection;
mod reporting;
mod risk;
mod scenario;

pub use benchmarks::{DefectFixCostMultipliers, IndustryBenchmarks};
pub use costs::{AvoidanceProfile, CostEngine, CostResult};
pub use engine::{
    CalculationOutcome, CalculationRequest, EfficiencyEngine, DEFAULT_BLENDED_RATE,
    DEFAULT_TOTAL_HOURS,
};
pub use feasibility::{FeasibilityEvaluator, FeasibilityResult, INITIATIVE_BOOST_PER_SELECTION};
pub use impact_matrix::{DeltaMatrix, ImpactMatrix};
pub use maturity::{
    Answer, AssessmentQuestion, AssessmentResponses, AutomationCharacteristics, CurrentMaturity,
    MaturityAssessor, MaturityLevel, MaturityTier, QuestionKind,
};
pub use portfolio::{InitiativePortfolio, InitiativeSetting, MaturityScaler};
pub use projection::{PhaseAllocation, PhaseHours, PhaseProjector, ALLOCATION_TOLERANCE};
pub use reporting::{
    format_fraction, percent_of, CredibilityWarning, InitiativeImpactRow, KpiSummary,
    PhaseSummaryRow, ReportAggregator, DEFAULT_MAX_CREDIBLE_COST_REDUCTION,
};
pub use risk::{RiskAdjuster, RiskWeights, RISK_WEIGHT_GUIDANCE, RISK_WEIGHT_SCALE};
pub use scenario::{
    ScalingFactors, ScenarioConfig, ScenarioScaler, CONSERVATIVE_CAPS, MAX_TARGET_PERCENTAGE,
    MIN_TARGET_PERCENTAGE,
};
