//! Impact model HTTP service.
//!
//! Loads configuration, initializes tracing, loads the impact matrix once and
//! serves the scenario API.

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use impact_model::adapters::http::{scenario_router, ScenarioAppState, ScenarioDefaults};
use impact_model::adapters::matrix::{SeedMatrixSource, YamlMatrixSource};
use impact_model::application::ScenarioService;
use impact_model::config::{AppConfig, CorsPolicy, LogFormat, ServerConfig};
use impact_model::ports::ImpactMatrixSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let source: Box<dyn ImpactMatrixSource> = match &config.engine.matrix_path {
        Some(path) => Box::new(YamlMatrixSource::new(path)),
        None => Box::new(SeedMatrixSource::new()),
    };

    let service = Arc::new(ScenarioService::new(config.engine.max_credible_cost_reduction));
    service.initialize(source.as_ref())?;

    let state = ScenarioAppState::new(service, ScenarioDefaults::from(&config.engine));
    let app = scenario_router()
        .with_state(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Impact model service listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match server.log_format() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = match server.cors_policy() {
        CorsPolicy::Permissive => return CorsLayer::permissive(),
        CorsPolicy::AllowList(origins) => origins,
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
