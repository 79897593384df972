//! HTTP integration tests for the scenario API.
//!
//! Requests go through the full router with `oneshot`, no network listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use impact_model::adapters::http::{scenario_router, ScenarioAppState, ScenarioDefaults};
use impact_model::adapters::matrix::SeedMatrixSource;
use impact_model::application::ScenarioService;

// ════════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════════

fn app_with(service: Arc<ScenarioService>) -> Router {
    scenario_router().with_state(ScenarioAppState::new(service, ScenarioDefaults::default()))
}

fn ready_app() -> Router {
    let service = Arc::new(ScenarioService::default());
    service.initialize(&SeedMatrixSource::new()).unwrap();
    app_with(service)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ════════════════════════════════════════════════════════════════════════════════
// Health and catalog
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn health_reports_engine_readiness() {
    let (status, body) = send(app_with(Arc::new(ScenarioService::default())), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["engine_ready"], false);

    let (_, body) = send(ready_app(), get("/health")).await;
    assert_eq!(body["engine_ready"], true);
}

#[tokio::test]
async fn catalog_lists_phases_and_initiatives() {
    let (status, body) = send(ready_app(), get("/api/catalog")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phases"].as_array().unwrap().len(), 7);
    assert_eq!(body["initiatives"].as_array().unwrap().len(), 7);
    assert_eq!(body["maturity_tiers"].as_array().unwrap().len(), 5);
    assert_eq!(body["defaults"]["total_hours"], 17054.0);
}

// ════════════════════════════════════════════════════════════════════════════════
// Maturity and feasibility
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn assess_maturity_reports_unmapped_answers() {
    let request = post(
        "/api/maturity/assess",
        json!({ "responses": { "ci_cd_maturity": "Carrier pigeon" } }),
    );
    let (status, body) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], 1);
    assert_eq!(body["unmapped_responses"], json!(["ci_cd_maturity"]));
}

#[tokio::test]
async fn assess_maturity_ignores_slider_readings_outside_bounds() {
    let request = post(
        "/api/maturity/assess",
        json!({ "responses": { "test_automation_coverage": 500, "code_reuse_level": -300 } }),
    );
    let (status, body) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], 1);
    assert_eq!(body["assessment_score"], 0.0);
    assert_eq!(
        body["unmapped_responses"],
        json!(["test_automation_coverage", "code_reuse_level"])
    );
}

#[tokio::test]
async fn feasibility_rejects_target_outside_range() {
    let request = post(
        "/api/scenarios/feasibility",
        json!({ "target_percentage": 45.0 }),
    );
    let (status, body) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"].as_str().is_some());
}

#[tokio::test]
async fn feasibility_counts_selected_initiatives() {
    let request = post(
        "/api/scenarios/feasibility",
        json!({
            "target_percentage": 5.0,
            "selected_initiatives": ["automated_testing", "edcc"]
        }),
    );
    let (status, body) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["feasibility"]["feasible"], true);
    assert_eq!(body["feasibility"]["gap"], 0.0);
}

// ════════════════════════════════════════════════════════════════════════════════
// Scenario calculation
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn calculate_before_initialization_is_unavailable() {
    let request = post("/api/scenarios/calculate", json!({}));
    let (status, body) = send(app_with(Arc::new(ScenarioService::default())), request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "ENGINE_NOT_INITIALIZED");
}

#[tokio::test]
async fn calculate_with_defaults_returns_full_outcome() {
    let (status, body) = send(ready_app(), post("/api/scenarios/calculate", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase_summary"].as_array().unwrap().len(), 7);
    assert_eq!(body["initiative_impact"].as_array().unwrap().len(), 7);
    assert!(body["kpis"]["total_hours_saved"].as_f64().unwrap() > 0.0);
    assert!(body["maturity"]["level"].is_number());
    assert!(body["feasibility"]["feasible"].is_boolean());
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn allocation_not_summing_to_hundred_is_unprocessable() {
    let request = post(
        "/api/scenarios/calculate",
        json!({
            "phase_allocation": {
                "discover": 5.0, "plan": 10.0, "design": 15.0, "build": 25.0,
                "test": 20.0, "deploy": 10.0, "post_go_live": 10.0
            }
        }),
    );
    let (status, body) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_ALLOCATION");
    assert_eq!(body["details"]["total"], "95.00");
}

#[tokio::test]
async fn only_listed_initiatives_are_modeled() {
    let request = post(
        "/api/scenarios/calculate",
        json!({ "initiatives": { "automated_testing": { "maturity": 100.0 } } }),
    );
    let (status, body) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["initiative_impact"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["initiative"], "automated_testing");
}

#[tokio::test]
async fn out_of_range_risk_weight_is_rejected() {
    let request = post(
        "/api/scenarios/calculate",
        json!({ "risk_weights": { "test": 50.0 } }),
    );
    let (status, _) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/scenarios/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"target_percentage\": "))
        .unwrap();
    let (status, body) = send(ready_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
