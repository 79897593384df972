//! Scenario Scaler - Target-driven nonlinear boosts and conservative caps.
//!
//! The scaler takes the maturity-scaled delta matrix and amplifies the
//! test and quality sensitive phases according to the savings target and the
//! organization's maturity level. Aggressive targets paired with immature
//! organizations are then capped per phase.

use serde::Serialize;

use super::benchmarks::IndustryBenchmarks;
use super::feasibility::FeasibilityResult;
use super::impact_matrix::DeltaMatrix;
use super::maturity::{CurrentMaturity, MaturityLevel};
use crate::domain::foundation::{Phase, PhaseValues, ValidationError};

/// Lowest accepted savings target, in percent.
pub const MIN_TARGET_PERCENTAGE: f64 = 5.0;
/// Highest accepted savings target, in percent.
pub const MAX_TARGET_PERCENTAGE: f64 = 30.0;

/// Maximum savings per phase as a fraction of that phase's baseline hours.
pub const CONSERVATIVE_CAPS: PhaseValues =
    PhaseValues::new([0.35, 0.40, 0.45, 0.50, 0.60, 0.45, 0.65]);

/// A savings target bound to the assessed maturity it was set against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioConfig {
    target_percentage: f64,
    current_maturity: CurrentMaturity,
    #[serde(skip_serializing_if = "Option::is_none")]
    feasibility: Option<FeasibilityResult>,
    description: String,
}

impl ScenarioConfig {
    /// Creates a scenario for `target_percentage` (5-30%).
    ///
    /// # Errors
    /// `OutOfRange` when the target is outside 5..=30 or not finite.
    pub fn try_new(
        target_percentage: f64,
        current_maturity: CurrentMaturity,
    ) -> Result<Self, ValidationError> {
        ValidationError::check_range(
            "target_percentage",
            target_percentage,
            MIN_TARGET_PERCENTAGE,
            MAX_TARGET_PERCENTAGE,
        )?;

        let description = format!(
            "Target {}% savings (Current maturity: Level {})",
            target_percentage,
            current_maturity.level.value()
        );

        Ok(Self {
            target_percentage,
            current_maturity,
            feasibility: None,
            description,
        })
    }

    /// Attaches the feasibility evaluation for this target.
    pub fn with_feasibility(mut self, feasibility: FeasibilityResult) -> Self {
        self.feasibility = Some(feasibility);
        self
    }

    pub fn target_percentage(&self) -> f64 {
        self.target_percentage
    }

    pub fn current_maturity(&self) -> &CurrentMaturity {
        &self.current_maturity
    }

    pub fn maturity_level(&self) -> MaturityLevel {
        self.current_maturity.level
    }

    pub fn feasibility(&self) -> Option<&FeasibilityResult> {
        self.feasibility.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// True when the conservative caps apply (target above 20% below level 4).
    pub fn is_capped(&self) -> bool {
        self.target_percentage > 20.0 && self.maturity_level().value() < 4
    }
}

/// Intermediate multipliers derived from target and maturity level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingFactors {
    /// `T / 15`; a 15% target is neutral.
    pub base_intensity: f64,
    /// `L / 3`; level 3 is neutral.
    pub maturity_factor: f64,
    pub additional_factor: f64,
    pub testing_boost: f64,
    pub quality_boost: f64,
}

impl ScalingFactors {
    /// Computes the tiered factors for target `T` and level `L`.
    ///
    /// # Tiers
    /// - T ≤ 10: no additional factor, light testing and quality boosts.
    /// - 10 < T ≤ 20: linear ramp over `p = (T - 10) / 10`.
    /// - T > 20: steeper ramp over `p = min(1, (T - 20) / 10)`.
    pub fn compute(target_percentage: f64, level: MaturityLevel) -> Self {
        let base_intensity = target_percentage / 15.0;
        let maturity_factor = f64::from(level.value()) / 3.0;

        let (additional_factor, testing_weight, quality_weight) = if target_percentage <= 10.0 {
            (0.0, 0.20, 0.15)
        } else if target_percentage <= 20.0 {
            let progress = (target_percentage - 10.0) / 10.0;
            (
                progress * 0.8 * maturity_factor,
                0.30 + progress * 0.20,
                0.20 + progress * 0.15,
            )
        } else {
            let progress = ((target_percentage - 20.0) / 10.0).min(1.0);
            (
                (0.8 + progress * 0.7) * maturity_factor,
                0.50 + progress * 0.30,
                0.35 + progress * 0.25,
            )
        };

        Self {
            base_intensity,
            maturity_factor,
            additional_factor,
            testing_boost: base_intensity * testing_weight * maturity_factor,
            quality_boost: base_intensity * quality_weight * maturity_factor,
        }
    }

    /// Phases receiving the quality boost.
    pub fn quality_phases(&self) -> &'static [Phase] {
        const CORE: [Phase; 3] = [Phase::Design, Phase::Build, Phase::Test];
        const WITH_DEPLOY: [Phase; 4] = [Phase::Design, Phase::Build, Phase::Test, Phase::Deploy];
        if self.additional_factor > 0.5 {
            &WITH_DEPLOY
        } else {
            &CORE
        }
    }
}

/// Scenario scaling functions.
pub struct ScenarioScaler;

impl ScenarioScaler {
    /// Applies boosts and, when required, conservative caps.
    ///
    /// `baseline_hours` is the request's own per-phase baseline and is only
    /// consulted for capping.
    pub fn apply(
        deltas: &DeltaMatrix,
        scenario: &ScenarioConfig,
        benchmarks: &IndustryBenchmarks,
        baseline_hours: &PhaseValues,
    ) -> DeltaMatrix {
        let factors = ScalingFactors::compute(scenario.target_percentage(), scenario.maturity_level());
        let mut effective = Self::boost(deltas, &factors, benchmarks);

        if scenario.is_capped() {
            Self::cap(&mut effective, baseline_hours);
        }

        tracing::debug!(
            target_percentage = scenario.target_percentage(),
            maturity_level = scenario.maturity_level().value(),
            testing_boost = factors.testing_boost,
            quality_boost = factors.quality_boost,
            capped = scenario.is_capped(),
            "Scenario scaling applied"
        );

        effective
    }

    /// Multiplies the Test column and the quality phases by their boosts.
    pub fn boost(
        deltas: &DeltaMatrix,
        factors: &ScalingFactors,
        benchmarks: &IndustryBenchmarks,
    ) -> DeltaMatrix {
        let mut boosted = *deltas;

        if factors.testing_boost > 0.0 {
            boosted.scale_column(
                Phase::Test,
                1.0 + benchmarks.testing_phase_reduction * factors.testing_boost,
            );
        }

        if factors.quality_boost > 0.0 {
            let multiplier = 1.0 + benchmarks.quality_improvement * factors.quality_boost;
            for phase in factors.quality_phases() {
                boosted.scale_column(*phase, multiplier);
            }
        }

        boosted
    }

    /// Scales down any phase column whose total savings exceed its cap.
    ///
    /// # Edge Cases
    /// - A zero baseline caps the column to zero savings.
    pub fn cap(deltas: &mut DeltaMatrix, baseline_hours: &PhaseValues) {
        for (phase, cap_fraction) in CONSERVATIVE_CAPS.iter() {
            let max_savings = baseline_hours[phase] * cap_fraction;
            let total_savings = deltas.column_sum(phase).abs();
            if total_savings > max_savings {
                deltas.scale_column(phase, max_savings / total_savings);
            }
        }
    }
}
