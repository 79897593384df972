//! EvaluateFeasibilityHandler - Query handler checking a savings target.

use serde::Serialize;

use crate::domain::efficiency::{
    AssessmentResponses, CurrentMaturity, FeasibilityEvaluator, FeasibilityResult,
    MaturityAssessor, MAX_TARGET_PERCENTAGE, MIN_TARGET_PERCENTAGE,
};
use crate::domain::foundation::{DomainError, Initiative, ValidationError};

/// Query to evaluate whether a target is reachable.
#[derive(Debug, Clone)]
pub struct EvaluateFeasibilityQuery {
    pub responses: AssessmentResponses,
    /// Savings target in percent (5-30).
    pub target_percentage: f64,
    pub selected_initiatives: Vec<Initiative>,
}

/// Assessed maturity plus the feasibility verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluateFeasibilityResult {
    pub maturity: CurrentMaturity,
    pub feasibility: FeasibilityResult,
}

/// Handler for feasibility evaluation. Needs no loaded engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateFeasibilityHandler;

impl EvaluateFeasibilityHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: EvaluateFeasibilityQuery,
    ) -> Result<EvaluateFeasibilityResult, DomainError> {
        ValidationError::check_range(
            "target_percentage",
            query.target_percentage,
            MIN_TARGET_PERCENTAGE,
            MAX_TARGET_PERCENTAGE,
        )?;

        let mut selected = query.selected_initiatives;
        selected.sort();
        selected.dedup();

        let maturity = MaturityAssessor::assess(&query.responses);
        let feasibility = FeasibilityEvaluator::evaluate(&maturity, query.target_percentage, &selected);

        Ok(EvaluateFeasibilityResult {
            maturity,
            feasibility,
        })
    }
}
