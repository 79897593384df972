//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, closed enumerations, and error types
//! that form the vocabulary of the impact model.

mod errors;
mod initiative;
mod percentage;
mod phase;
mod phase_values;
mod risk_weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use initiative::{Initiative, INITIATIVE_COUNT};
pub use percentage::Percentage;
pub use phase::{Phase, PhaseRiskProfile, PHASE_COUNT};
pub use phase_values::PhaseValues;
pub use risk_weight::RiskWeight;
