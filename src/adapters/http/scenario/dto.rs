//! HTTP DTOs for scenario endpoints.
//!
//! Requests are converted into application queries here. Everything except
//! the questionnaire answers deserializes straight into domain types.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::efficiency::{
    Answer, AssessmentQuestion, AssessmentResponses, AvoidanceProfile, IndustryBenchmarks,
    InitiativePortfolio, InitiativeSetting, QuestionKind, RiskWeights,
};
use crate::domain::foundation::{DomainError, Initiative, Phase};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Raw questionnaire answers keyed by question key.
///
/// Numbers answer sliders within the slider's bounds; strings answer selects
/// by option label. Unknown question keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ResponsesDto(pub BTreeMap<String, serde_json::Value>);

impl ResponsesDto {
    pub fn into_responses(self) -> AssessmentResponses {
        self.0
            .into_iter()
            .filter_map(|(key, value)| match AssessmentQuestion::from_key(&key) {
                Some(question) => Some((question, Self::answer_for(question, value))),
                None => {
                    tracing::debug!(question = %key, "Ignoring unknown assessment question");
                    None
                }
            })
            .collect()
    }

    fn answer_for(question: AssessmentQuestion, value: serde_json::Value) -> Answer {
        match (question.kind(), value) {
            (QuestionKind::Slider { .. }, serde_json::Value::Number(n)) => match n.as_f64() {
                Some(v) => Answer::from_number(question, v),
                None => Answer::Unrecognized(n.to_string()),
            },
            (_, serde_json::Value::String(label)) => Answer::from_label(question, &label),
            (_, other) => Answer::Unrecognized(other.to_string()),
        }
    }
}

/// POST /api/maturity/assess
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessMaturityRequest {
    #[serde(default)]
    pub responses: ResponsesDto,
}

/// POST /api/scenarios/feasibility
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateFeasibilityRequest {
    #[serde(default)]
    pub responses: ResponsesDto,
    pub target_percentage: f64,
    #[serde(default)]
    pub selected_initiatives: Vec<Initiative>,
}

/// POST /api/scenarios/calculate
///
/// Every field is optional; omitted fields take configured or model defaults.
/// When `initiatives` is present, initiatives missing from it are excluded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CalculateScenarioRequest {
    pub responses: Option<ResponsesDto>,
    pub target_percentage: Option<f64>,
    pub total_hours: Option<f64>,
    pub blended_rate: Option<f64>,
    pub phase_allocation: Option<BTreeMap<Phase, f64>>,
    pub initiatives: Option<BTreeMap<Initiative, InitiativeSetting>>,
    pub industry_benchmarks: Option<IndustryBenchmarks>,
    pub avoidance_profile: Option<AvoidanceProfile>,
    pub risk_weights: Option<RiskWeights>,
}

impl CalculateScenarioRequest {
    /// Builds the portfolio; `None` means every initiative at the default setting.
    pub fn portfolio(&self) -> InitiativePortfolio {
        match &self.initiatives {
            None => InitiativePortfolio::default(),
            Some(settings) => Initiative::all().iter().fold(
                InitiativePortfolio::default(),
                |portfolio, initiative| {
                    let setting = settings
                        .get(initiative)
                        .copied()
                        .unwrap_or_else(InitiativeSetting::disabled);
                    portfolio.with(*initiative, setting)
                },
            ),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine_ready: bool,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message,
            details: if error.details.is_empty() {
                None
            } else {
                Some(error.details)
            },
        }
    }
}
