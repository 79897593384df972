//! Feasibility Evaluator - Compares a savings target with assessed potential.

use serde::Serialize;

use super::maturity::{AssessmentQuestion, CurrentMaturity, MaturityLevel};
use crate::domain::foundation::Initiative;

/// Flat savings increment credited per selected initiative, in percentage points.
pub const INITIATIVE_BOOST_PER_SELECTION: f64 = 1.5;

/// Outcome of checking a target against current potential.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityResult {
    pub feasible: bool,
    pub current_potential: f64,
    pub total_potential_with_initiatives: f64,
    /// Percentage points missing; zero when feasible.
    pub gap: f64,
    pub required_level: MaturityLevel,
    pub required_level_name: &'static str,
    pub recommendations: Vec<String>,
}

/// Target feasibility analysis functions.
pub struct FeasibilityEvaluator;

impl FeasibilityEvaluator {
    /// Evaluates whether `target_percentage` is reachable.
    ///
    /// # Algorithm
    /// total = potential + 1.5 × |selected|; feasible iff target ≤ total.
    /// When infeasible, the required level is the lowest whose savings ceiling
    /// plus the same initiative boost reaches the target (level 5 if none does).
    pub fn evaluate(
        current: &CurrentMaturity,
        target_percentage: f64,
        selected: &[Initiative],
    ) -> FeasibilityResult {
        let initiative_boost = Self::initiative_boost(selected.len());
        let total_potential = current.savings_potential + initiative_boost;
        let feasible = target_percentage <= total_potential;

        let required_level = if feasible {
            current.level
        } else {
            MaturityLevel::all()
                .find(|level| target_percentage <= level.tier().savings_range[1] + initiative_boost)
                .unwrap_or(MaturityLevel::MAX)
        };

        FeasibilityResult {
            feasible,
            current_potential: current.savings_potential,
            total_potential_with_initiatives: total_potential,
            gap: (target_percentage - total_potential).max(0.0),
            required_level,
            required_level_name: required_level.name(),
            recommendations: Self::recommendations(current, required_level),
        }
    }

    /// 1.5 percentage points per selected initiative.
    pub fn initiative_boost(selected_count: usize) -> f64 {
        selected_count as f64 * INITIATIVE_BOOST_PER_SELECTION
    }

    /// Builds the advisory list for closing the gap to `target_level`.
    pub fn recommendations(current: &CurrentMaturity, target_level: MaturityLevel) -> Vec<String> {
        if target_level <= current.level {
            return vec!["Your current maturity level is sufficient for this target".to_string()];
        }

        let mut recommendations = Vec::new();

        if current.needs_improvement(AssessmentQuestion::TestAutomationCoverage) {
            recommendations.push("Increase automated test coverage to 60%+ (current focus area)".to_string());
        }
        if current.needs_improvement(AssessmentQuestion::CiCdMaturity) {
            recommendations.push("Implement full CI/CD pipeline with automated deployments".to_string());
        }
        if current.needs_improvement(AssessmentQuestion::CodeReuseLevel) {
            recommendations.push("Develop reusable component library (target 40%+ reuse)".to_string());
        }
        if target_level.value() >= 4 {
            recommendations.push("Implement Infrastructure as Code for environment management".to_string());
            recommendations.push("Add comprehensive monitoring and measurement systems".to_string());
        }
        if target_level.value() >= 5 {
            recommendations.push("Focus on continuous optimization and AI-assisted processes".to_string());
        }

        recommendations
    }
}
