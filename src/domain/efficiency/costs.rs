//! Cost Engine - Hours to money, savings and post-launch cost avoidance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::projection::PhaseHours;
use crate::domain::foundation::{Phase, PhaseValues, ValidationError};

/// Named cost-avoidance profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvoidanceProfile {
    None,
    Minimal,
    Conservative,
    #[default]
    Moderate,
    Aggressive,
    Maximum,
}

impl AvoidanceProfile {
    /// Returns all profiles, least to most aggressive.
    pub fn all() -> &'static [AvoidanceProfile] {
        &[
            AvoidanceProfile::None,
            AvoidanceProfile::Minimal,
            AvoidanceProfile::Conservative,
            AvoidanceProfile::Moderate,
            AvoidanceProfile::Aggressive,
            AvoidanceProfile::Maximum,
        ]
    }

    /// Multiplier applied to the base avoidance.
    pub fn multiplier(&self) -> f64 {
        match self {
            AvoidanceProfile::None => 0.0,
            AvoidanceProfile::Minimal => 0.5,
            AvoidanceProfile::Conservative => 1.5,
            AvoidanceProfile::Moderate => 2.5,
            AvoidanceProfile::Aggressive => 4.0,
            AvoidanceProfile::Maximum => 6.0,
        }
    }

    /// Share of development savings that recurs after launch.
    pub fn ongoing_factor(&self) -> f64 {
        match self {
            AvoidanceProfile::None => 0.0,
            AvoidanceProfile::Minimal => 0.25,
            AvoidanceProfile::Conservative => 0.5,
            AvoidanceProfile::Moderate => 0.8,
            AvoidanceProfile::Aggressive => 1.2,
            AvoidanceProfile::Maximum => 1.5,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AvoidanceProfile::None => "none",
            AvoidanceProfile::Minimal => "minimal",
            AvoidanceProfile::Conservative => "conservative",
            AvoidanceProfile::Moderate => "moderate",
            AvoidanceProfile::Aggressive => "aggressive",
            AvoidanceProfile::Maximum => "maximum",
        }
    }

    /// Label shown in selectors, e.g. "Moderate (2.5x)".
    pub fn label(&self) -> &'static str {
        match self {
            AvoidanceProfile::None => "None (0x)",
            AvoidanceProfile::Minimal => "Minimal (0.5x)",
            AvoidanceProfile::Conservative => "Conservative (1.5x)",
            AvoidanceProfile::Moderate => "Moderate (2.5x)",
            AvoidanceProfile::Aggressive => "Aggressive (4x)",
            AvoidanceProfile::Maximum => "Maximum (6x)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AvoidanceProfile::None => "No cost avoidance - development savings only",
            AvoidanceProfile::Minimal => "Very conservative long-term benefits",
            AvoidanceProfile::Conservative => "Minimal long-term benefits, risk-averse estimate",
            AvoidanceProfile::Moderate => "Typical shift-left benefits, industry average",
            AvoidanceProfile::Aggressive => "High-maturity organization with strong processes",
            AvoidanceProfile::Maximum => "Best-case scenario with full DevOps maturity",
        }
    }

    /// `max(0, savings × ongoing_factor) × multiplier`.
    pub fn avoidance_for(&self, savings: f64) -> f64 {
        (savings * self.ongoing_factor()).max(0.0) * self.multiplier()
    }
}

impl fmt::Display for AvoidanceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AvoidanceProfile {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()) || p.label() == s.trim())
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "avoidance_profile",
                    format!("unknown avoidance profile '{}'", s),
                )
            })
    }
}

/// Per-phase money figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostResult {
    pub baseline_cost: PhaseValues,
    pub modeled_cost: PhaseValues,
    /// `baseline_cost - modeled_cost`; negative when modeled exceeds baseline.
    pub savings: PhaseValues,
    /// Nonzero only for Post Go-Live.
    pub avoidance: PhaseValues,
}

/// Cost calculation functions.
pub struct CostEngine;

impl CostEngine {
    /// Converts hours to costs and derives savings and avoidance.
    ///
    /// # Algorithm
    /// Avoidance for Post Go-Live is based on the summed savings of the six
    /// development phases, passed through the profile.
    pub fn calculate(hours: &PhaseHours, blended_rate: f64, profile: AvoidanceProfile) -> CostResult {
        let baseline_cost = hours.baseline.map(|_, h| h * blended_rate);
        let modeled_cost = hours.modeled.map(|_, h| h * blended_rate);
        let savings = baseline_cost.map(|phase, cost| cost - modeled_cost[phase]);

        let development_savings = savings.development_sum();
        let mut avoidance = PhaseValues::ZERO;
        avoidance[Phase::PostGoLive] = profile.avoidance_for(development_savings);

        CostResult {
            baseline_cost,
            modeled_cost,
            savings,
            avoidance,
        }
    }
}
