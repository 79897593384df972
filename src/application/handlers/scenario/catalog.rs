//! GetCatalogHandler - Static reference data for building a scenario.

use serde::Serialize;

use crate::domain::efficiency::{
    AssessmentQuestion, AvoidanceProfile, IndustryBenchmarks, MaturityLevel, MaturityTier,
    PhaseAllocation, QuestionKind, RiskWeights, DEFAULT_BLENDED_RATE, DEFAULT_TOTAL_HOURS,
    MAX_TARGET_PERCENTAGE, MIN_TARGET_PERCENTAGE, RISK_WEIGHT_GUIDANCE, RISK_WEIGHT_SCALE,
};
use crate::domain::foundation::{Initiative, Phase, PhaseRiskProfile};

#[derive(Debug, Clone, Serialize)]
pub struct PhaseEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub risk: PhaseRiskProfile,
    pub recommended_risk_weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitiativeEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Descriptions at 0, 25, 50, 75 and 100% maturity.
    pub maturity_descriptions: [&'static str; 5],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionEntry {
    pub key: &'static str,
    pub prompt: &'static str,
    pub help: &'static str,
    pub weight: f64,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvoidanceProfileEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub multiplier: f64,
    pub ongoing_factor: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskGuidance {
    pub description: &'static str,
    pub scale: Vec<RiskScaleEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskScaleEntry {
    pub weight: f64,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogDefaults {
    pub total_hours: f64,
    pub blended_rate: f64,
    pub target_range: [f64; 2],
    pub allocation: PhaseAllocation,
    pub benchmarks: IndustryBenchmarks,
    pub avoidance_profile: AvoidanceProfile,
    pub recommended_risk_weights: RiskWeights,
}

/// Everything a caller needs to present the model's inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub phases: Vec<PhaseEntry>,
    pub initiatives: Vec<InitiativeEntry>,
    pub maturity_tiers: Vec<MaturityTier>,
    pub questions: Vec<QuestionEntry>,
    pub avoidance_profiles: Vec<AvoidanceProfileEntry>,
    pub risk_guidance: RiskGuidance,
    pub defaults: CatalogDefaults,
}

/// Handler returning the catalog, with project defaults taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct GetCatalogHandler {
    total_hours: f64,
    blended_rate: f64,
    avoidance_profile: AvoidanceProfile,
}

impl Default for GetCatalogHandler {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_HOURS, DEFAULT_BLENDED_RATE, AvoidanceProfile::default())
    }
}

impl GetCatalogHandler {
    pub fn new(total_hours: f64, blended_rate: f64, avoidance_profile: AvoidanceProfile) -> Self {
        Self {
            total_hours,
            blended_rate,
            avoidance_profile,
        }
    }

    pub fn handle(&self) -> Catalog {
        let recommended = RiskWeights::recommended();

        Catalog {
            phases: Phase::all()
                .iter()
                .map(|phase| PhaseEntry {
                    key: phase.key(),
                    name: phase.display_name(),
                    risk: phase.risk_profile(),
                    recommended_risk_weight: recommended.get(*phase).value(),
                })
                .collect(),
            initiatives: Initiative::all()
                .iter()
                .map(|initiative| InitiativeEntry {
                    key: initiative.key(),
                    name: initiative.display_name(),
                    description: initiative.description(),
                    maturity_descriptions: initiative.maturity_descriptions(),
                })
                .collect(),
            maturity_tiers: MaturityLevel::all().map(|level| *level.tier()).collect(),
            questions: AssessmentQuestion::all()
                .iter()
                .map(|question| QuestionEntry {
                    key: question.key(),
                    prompt: question.prompt(),
                    help: question.help(),
                    weight: question.weight(),
                    kind: question.kind(),
                })
                .collect(),
            avoidance_profiles: AvoidanceProfile::all()
                .iter()
                .map(|profile| AvoidanceProfileEntry {
                    key: profile.key(),
                    label: profile.label(),
                    description: profile.description(),
                    multiplier: profile.multiplier(),
                    ongoing_factor: profile.ongoing_factor(),
                })
                .collect(),
            risk_guidance: RiskGuidance {
                description: RISK_WEIGHT_GUIDANCE,
                scale: RISK_WEIGHT_SCALE
                    .iter()
                    .map(|(weight, meaning)| RiskScaleEntry {
                        weight: *weight,
                        meaning,
                    })
                    .collect(),
            },
            defaults: CatalogDefaults {
                total_hours: self.total_hours,
                blended_rate: self.blended_rate,
                target_range: [MIN_TARGET_PERCENTAGE, MAX_TARGET_PERCENTAGE],
                allocation: PhaseAllocation::default(),
                benchmarks: IndustryBenchmarks::default(),
                avoidance_profile: self.avoidance_profile,
                recommended_risk_weights: recommended,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_closed_set() {
        let catalog = GetCatalogHandler::default().handle();
        assert_eq!(catalog.phases.len(), 7);
        assert_eq!(catalog.initiatives.len(), 7);
        assert_eq!(catalog.maturity_tiers.len(), 5);
        assert_eq!(catalog.questions.len(), 5);
        assert_eq!(catalog.avoidance_profiles.len(), 6);
        assert_eq!(catalog.risk_guidance.scale.len(), 7);
    }

    #[test]
    fn question_weights_sum_to_one() {
        let catalog = GetCatalogHandler::default().handle();
        let total: f64 = catalog.questions.iter().map(|q| q.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn defaults_follow_configuration() {
        let catalog = GetCatalogHandler::new(5000.0, 85.0, AvoidanceProfile::Conservative).handle();
        assert_eq!(catalog.defaults.total_hours, 5000.0);
        assert_eq!(catalog.defaults.blended_rate, 85.0);
        assert_eq!(catalog.defaults.avoidance_profile, AvoidanceProfile::Conservative);
    }

    #[test]
    fn catalog_serializes_phase_keys() {
        let json = serde_json::to_value(GetCatalogHandler::default().handle()).unwrap();
        assert_eq!(json["phases"][6]["key"], "post_go_live");
        assert_eq!(json["phases"][6]["recommended_risk_weight"], 7.0);
        assert_eq!(json["defaults"]["allocation"]["build"], 25.0);
    }
}
