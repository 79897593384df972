//! Route configuration for scenario endpoints.
//!
//! Configures Axum router with impact model routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    assess_maturity, calculate_scenario, evaluate_feasibility, get_catalog, health,
    ScenarioAppState,
};

/// Creates the scenario router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness and engine readiness
/// - `GET /api/catalog` - Phases, initiatives, questions and defaults
/// - `POST /api/maturity/assess` - Score a questionnaire
/// - `POST /api/scenarios/feasibility` - Check a target against current maturity
/// - `POST /api/scenarios/calculate` - Run the full scenario pipeline
pub fn scenario_router() -> Router<ScenarioAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalog", get(get_catalog))
        .route("/api/maturity/assess", post(assess_maturity))
        .route("/api/scenarios/feasibility", post(evaluate_feasibility))
        .route("/api/scenarios/calculate", post(calculate_scenario))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::scenario::ScenarioService;
    use crate::adapters::http::scenario::handlers::ScenarioDefaults;
    use crate::domain::efficiency::{EfficiencyEngine, ImpactMatrix};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn ready_state() -> ScenarioAppState {
        ScenarioAppState::new(
            Arc::new(ScenarioService::with_engine(EfficiencyEngine::new(ImpactMatrix::seed()))),
            ScenarioDefaults::default(),
        )
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        let app = scenario_router().with_state(ready_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn calculate_accepts_empty_body_object() {
        let app = scenario_router().with_state(ready_state());

        let response = app
            .oneshot(post_json("/api/scenarios/calculate", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = scenario_router().with_state(ready_state());

        let response = app
            .oneshot(post_json("/api/maturity/assess", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn uninitialized_engine_is_unavailable() {
        let state = ScenarioAppState::new(
            Arc::new(ScenarioService::default()),
            ScenarioDefaults::default(),
        );
        let app = scenario_router().with_state(state);

        let response = app
            .oneshot(post_json("/api/scenarios/calculate", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
