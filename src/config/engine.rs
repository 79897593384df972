//! Impact engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::efficiency::{
    AvoidanceProfile, DEFAULT_BLENDED_RATE, DEFAULT_MAX_CREDIBLE_COST_REDUCTION,
    DEFAULT_TOTAL_HOURS,
};

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// YAML impact matrix to load instead of the built-in sample
    pub matrix_path: Option<PathBuf>,

    /// Cost reduction above which a credibility warning is raised
    #[serde(default = "default_max_credible_cost_reduction")]
    pub max_credible_cost_reduction: f64,

    #[serde(default = "default_total_hours")]
    pub default_total_hours: f64,

    #[serde(default = "default_blended_rate")]
    pub default_blended_rate: f64,

    #[serde(default)]
    pub default_avoidance_profile: AvoidanceProfile,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let limit = self.max_credible_cost_reduction;
        if !(limit > 0.0 && limit <= 1.0) {
            return Err(ValidationError::InvalidCredibilityLimit(limit));
        }
        for (field, value) in [
            ("total_hours", self.default_total_hours),
            ("blended_rate", self.default_blended_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidDefault { field, value });
            }
        }
        if matches!(&self.matrix_path, Some(path) if path.as_os_str().is_empty()) {
            return Err(ValidationError::EmptyMatrixPath);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            matrix_path: None,
            max_credible_cost_reduction: default_max_credible_cost_reduction(),
            default_total_hours: default_total_hours(),
            default_blended_rate: default_blended_rate(),
            default_avoidance_profile: AvoidanceProfile::default(),
        }
    }
}

fn default_max_credible_cost_reduction() -> f64 {
    DEFAULT_MAX_CREDIBLE_COST_REDUCTION
}

fn default_total_hours() -> f64 {
    DEFAULT_TOTAL_HOURS
}

fn default_blended_rate() -> f64 {
    DEFAULT_BLENDED_RATE
}
