//! HTTP handlers for scenario endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::scenario::{
    AssessMaturityHandler, AssessMaturityQuery, AssessMaturityResult, CalculateScenarioHandler,
    CalculateScenarioQuery, CalculateScenarioResult, Catalog, EvaluateFeasibilityHandler,
    EvaluateFeasibilityQuery, EvaluateFeasibilityResult, GetCatalogHandler, ScenarioService,
};
use crate::config::EngineConfig;
use crate::domain::efficiency::{
    AvoidanceProfile, PhaseAllocation, DEFAULT_BLENDED_RATE, DEFAULT_TOTAL_HOURS,
};
use crate::domain::foundation::{DomainError, ErrorCode, PhaseValues};

use super::dto::{
    AssessMaturityRequest, CalculateScenarioRequest, ErrorResponse, EvaluateFeasibilityRequest,
    HealthResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Scenario API error that implements IntoResponse.
#[derive(Debug)]
pub enum ScenarioApiError {
    /// Body could not be parsed into the request DTO.
    MalformedBody(String),
    Domain(DomainError),
}

impl ScenarioApiError {
    fn status(&self) -> StatusCode {
        match self {
            ScenarioApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ScenarioApiError::Domain(error) => match error.code {
                ErrorCode::OutOfRange | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
                ErrorCode::InvalidAllocation => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::EngineNotInitialized => StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::MatrixUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ScenarioApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = match self {
            ScenarioApiError::MalformedBody(msg) => ErrorResponse::bad_request(msg),
            ScenarioApiError::Domain(error) => {
                if status.is_server_error() {
                    tracing::error!(code = %error.code, message = %error.message, "Scenario request failed");
                }
                ErrorResponse::from(error)
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for ScenarioApiError {
    fn from(error: DomainError) -> Self {
        ScenarioApiError::Domain(error)
    }
}

impl From<JsonRejection> for ScenarioApiError {
    fn from(rejection: JsonRejection) -> Self {
        ScenarioApiError::MalformedBody(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Project defaults applied to omitted request fields.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioDefaults {
    pub total_hours: f64,
    pub blended_rate: f64,
    pub avoidance_profile: AvoidanceProfile,
}

impl Default for ScenarioDefaults {
    fn default() -> Self {
        Self {
            total_hours: DEFAULT_TOTAL_HOURS,
            blended_rate: DEFAULT_BLENDED_RATE,
            avoidance_profile: AvoidanceProfile::default(),
        }
    }
}

impl From<&EngineConfig> for ScenarioDefaults {
    fn from(engine: &EngineConfig) -> Self {
        Self {
            total_hours: engine.default_total_hours,
            blended_rate: engine.default_blended_rate,
            avoidance_profile: engine.default_avoidance_profile,
        }
    }
}

/// Shared application state containing scenario dependencies.
#[derive(Clone)]
pub struct ScenarioAppState {
    pub service: Arc<ScenarioService>,
    pub defaults: ScenarioDefaults,
}

impl ScenarioAppState {
    pub fn new(service: Arc<ScenarioService>, defaults: ScenarioDefaults) -> Self {
        Self { service, defaults }
    }

    pub fn catalog_handler(&self) -> GetCatalogHandler {
        GetCatalogHandler::new(
            self.defaults.total_hours,
            self.defaults.blended_rate,
            self.defaults.avoidance_profile,
        )
    }

    pub fn assess_maturity_handler(&self) -> AssessMaturityHandler {
        AssessMaturityHandler::new()
    }

    pub fn evaluate_feasibility_handler(&self) -> EvaluateFeasibilityHandler {
        EvaluateFeasibilityHandler::new()
    }

    pub fn calculate_scenario_handler(&self) -> CalculateScenarioHandler {
        CalculateScenarioHandler::new(self.service.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health(State(state): State<ScenarioAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        engine_ready: state.service.is_initialized(),
    })
}

/// GET /api/catalog
///
/// Returns phases, initiatives, maturity tiers, questions and defaults.
pub async fn get_catalog(State(state): State<ScenarioAppState>) -> Json<Catalog> {
    Json(state.catalog_handler().handle())
}

/// POST /api/maturity/assess
pub async fn assess_maturity(
    State(state): State<ScenarioAppState>,
    payload: Result<Json<AssessMaturityRequest>, JsonRejection>,
) -> Result<Json<AssessMaturityResult>, ScenarioApiError> {
    let Json(request) = payload?;

    let query = AssessMaturityQuery {
        responses: request.responses.into_responses(),
    };

    Ok(Json(state.assess_maturity_handler().handle(query)))
}

/// POST /api/scenarios/feasibility
pub async fn evaluate_feasibility(
    State(state): State<ScenarioAppState>,
    payload: Result<Json<EvaluateFeasibilityRequest>, JsonRejection>,
) -> Result<Json<EvaluateFeasibilityResult>, ScenarioApiError> {
    let Json(request) = payload?;

    let query = EvaluateFeasibilityQuery {
        responses: request.responses.into_responses(),
        target_percentage: request.target_percentage,
        selected_initiatives: request.selected_initiatives,
    };

    let result = state.evaluate_feasibility_handler().handle(query)?;
    Ok(Json(result))
}

/// POST /api/scenarios/calculate
///
/// Runs the full pipeline. Omitted fields fall back to defaults.
pub async fn calculate_scenario(
    State(state): State<ScenarioAppState>,
    payload: Result<Json<CalculateScenarioRequest>, JsonRejection>,
) -> Result<Json<CalculateScenarioResult>, ScenarioApiError> {
    let Json(request) = payload?;
    let fallback = CalculateScenarioQuery::default();

    // Allocation totals are checked here; the engine accepts any allocation.
    let allocation = match &request.phase_allocation {
        Some(raw) => {
            let mut percentages = PhaseValues::ZERO;
            for (phase, value) in raw {
                percentages[*phase] = *value;
            }
            PhaseAllocation::try_new(percentages)?
        }
        None => PhaseAllocation::default(),
    };

    let portfolio = request.portfolio();
    let query = CalculateScenarioQuery {
        responses: request
            .responses
            .map(|r| r.into_responses())
            .unwrap_or(fallback.responses),
        target_percentage: request.target_percentage.unwrap_or(fallback.target_percentage),
        total_hours: request.total_hours.unwrap_or(state.defaults.total_hours),
        blended_rate: request.blended_rate.unwrap_or(state.defaults.blended_rate),
        allocation,
        portfolio,
        benchmarks: request.industry_benchmarks.unwrap_or_default(),
        avoidance_profile: request
            .avoidance_profile
            .unwrap_or(state.defaults.avoidance_profile),
        risk_weights: request.risk_weights.unwrap_or_default(),
    };

    let result = state.calculate_scenario_handler().handle(query)?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn validation_codes_map_to_bad_request() {
        let error = ScenarioApiError::from(DomainError::from(ValidationError::out_of_range(
            "target_percentage",
            5.0,
            30.0,
            45.0,
        )));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn allocation_errors_map_to_unprocessable() {
        let error = ScenarioApiError::from(DomainError::new(ErrorCode::InvalidAllocation, "sum"));
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn uninitialized_engine_maps_to_unavailable() {
        let error = ScenarioApiError::from(DomainError::engine_not_initialized());
        assert_eq!(error.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn defaults_follow_engine_config() {
        let engine = EngineConfig {
            default_total_hours: 5000.0,
            default_avoidance_profile: AvoidanceProfile::Aggressive,
            ..Default::default()
        };
        let defaults = ScenarioDefaults::from(&engine);

        assert_eq!(defaults.total_hours, 5000.0);
        assert_eq!(defaults.blended_rate, DEFAULT_BLENDED_RATE);
        assert_eq!(defaults.avoidance_profile, AvoidanceProfile::Aggressive);
    }

    #[test]
    fn matrix_errors_map_to_internal() {
        let error = ScenarioApiError::from(DomainError::new(ErrorCode::MatrixUnavailable, "gone"));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
