//! Risk Adjuster - Reporting-only risk-weighted hours.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Phase, PhaseValues, RiskWeight, PHASE_COUNT};

/// How risk weights are meant to be read.
pub const RISK_WEIGHT_GUIDANCE: &str = "Risk weights multiply your modeled hours to account for project \
     complexity, team experience, and potential issues. Higher weights \
     = more conservative estimates.";

/// Reference weights and their meaning, lowest first.
pub const RISK_WEIGHT_SCALE: [(f64, &str); 7] = [
    (0.5, "Very low risk - Simple, well-understood work"),
    (1.0, "Low risk - Standard complexity, experienced team"),
    (2.0, "Moderate risk - Some complexity or unknowns"),
    (3.0, "Medium-high risk - Significant complexity"),
    (5.0, "High risk - Major complexity, new technology"),
    (7.0, "Very high risk - Critical path, many unknowns"),
    (10.0, "Maximum risk - Experimental, high uncertainty"),
];

/// One risk weight per phase. Missing weights are neutral (1.0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RiskWeights([RiskWeight; PHASE_COUNT]);

impl RiskWeights {
    /// Suggested starting weights, rising 1 through 7 by phase order.
    pub fn recommended() -> Self {
        let mut weights = Self::default();
        for phase in Phase::all() {
            weights.0[phase.order_index()] = RiskWeight::try_from(phase.order_index() as f64 + 1.0)
                .unwrap_or_default();
        }
        weights
    }

    /// Sets the weight for one phase.
    pub fn with(mut self, phase: Phase, weight: RiskWeight) -> Self {
        self.0[phase.order_index()] = weight;
        self
    }

    pub fn get(&self, phase: Phase) -> RiskWeight {
        self.0[phase.order_index()]
    }

    /// Weights as plain multipliers.
    pub fn as_values(&self) -> PhaseValues {
        PhaseValues::from_fn(|phase| self.get(phase).value())
    }
}

impl Serialize for RiskWeights {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_values().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RiskWeights {
    /// Accepts a partial `{phase: weight}` map.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<Phase, RiskWeight>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .fold(Self::default(), |weights, (phase, weight)| weights.with(phase, weight)))
    }
}

/// Risk adjustment functions.
pub struct RiskAdjuster;

impl RiskAdjuster {
    /// `modeled × weight` per phase. Never fed back into costs.
    pub fn adjust(modeled_hours: &PhaseValues, weights: &RiskWeights) -> PhaseValues {
        modeled_hours.map(|phase, hours| hours * weights.get(phase).value())
    }
}
