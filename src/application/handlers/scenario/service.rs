//! ScenarioService - Owns the write-once calculation engine.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::domain::efficiency::{EfficiencyEngine, DEFAULT_MAX_CREDIBLE_COST_REDUCTION};
use crate::domain::foundation::DomainError;
use crate::ports::ImpactMatrixSource;

/// Holds the engine once its impact matrix has been loaded.
///
/// Calculations requested before `initialize` fail with
/// `EngineNotInitialized`.
#[derive(Debug)]
pub struct ScenarioService {
    engine: OnceCell<Arc<EfficiencyEngine>>,
    credibility_limit: f64,
}

impl Default for ScenarioService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREDIBLE_COST_REDUCTION)
    }
}

impl ScenarioService {
    /// Creates an uninitialized service.
    pub fn new(credibility_limit: f64) -> Self {
        Self {
            engine: OnceCell::new(),
            credibility_limit,
        }
    }

    /// Creates a service around an already built engine.
    pub fn with_engine(engine: EfficiencyEngine) -> Self {
        let credibility_limit = engine.credibility_limit();
        Self {
            engine: OnceCell::with_value(Arc::new(engine)),
            credibility_limit,
        }
    }

    /// Loads the matrix from `source` and builds the engine.
    ///
    /// Calling this again returns the existing engine without reloading.
    pub fn initialize(
        &self,
        source: &dyn ImpactMatrixSource,
    ) -> Result<Arc<EfficiencyEngine>, DomainError> {
        self.engine
            .get_or_try_init(|| {
                let matrix = source.load()?;
                tracing::info!(
                    source = %source.describe(),
                    total_delta = matrix.deltas().total(),
                    credibility_limit = self.credibility_limit,
                    "Impact matrix loaded"
                );
                Ok(Arc::new(
                    EfficiencyEngine::new(matrix).with_credibility_limit(self.credibility_limit),
                ))
            })
            .map(Arc::clone)
    }

    /// Returns the engine, or `EngineNotInitialized`.
    pub fn engine(&self) -> Result<Arc<EfficiencyEngine>, DomainError> {
        self.engine
            .get()
            .cloned()
            .ok_or_else(DomainError::engine_not_initialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.get().is_some()
    }
}
