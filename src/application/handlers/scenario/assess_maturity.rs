//! AssessMaturityHandler - Query handler scoring the maturity questionnaire.

use crate::domain::efficiency::{AssessmentResponses, CurrentMaturity, MaturityAssessor};

/// Query to assess organizational maturity.
#[derive(Debug, Clone, Default)]
pub struct AssessMaturityQuery {
    pub responses: AssessmentResponses,
}

/// Result of a maturity assessment.
pub type AssessMaturityResult = CurrentMaturity;

/// Handler for maturity assessment. Needs no loaded engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessMaturityHandler;

impl AssessMaturityHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: AssessMaturityQuery) -> AssessMaturityResult {
        let maturity = MaturityAssessor::assess(&query.responses);
        tracing::debug!(
            level = maturity.level.value(),
            score = maturity.assessment_score,
            savings_potential = maturity.savings_potential,
            "Maturity assessed"
        );
        maturity
    }
}
