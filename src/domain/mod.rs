//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (phases, initiatives, value objects, errors)
//! - `efficiency` - Maturity assessment, scaling, projection, costing and reporting

pub mod efficiency;
pub mod foundation;
