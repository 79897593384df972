//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Maximum credible cost reduction must be in (0, 1], got {0}")]
    InvalidCredibilityLimit(f64),

    #[error("Default {field} must be a non-negative number, got {value}")]
    InvalidDefault { field: &'static str, value: f64 },

    #[error("Impact matrix path is empty")]
    EmptyMatrixPath,
}
