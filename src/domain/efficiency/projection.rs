//! Phase Projector - Baseline and modeled hours per phase.

use serde::{Deserialize, Serialize};

use super::impact_matrix::DeltaMatrix;
use crate::domain::foundation::{DomainError, ErrorCode, Phase, PhaseValues};

/// Allowed deviation of the allocation total from 100%.
pub const ALLOCATION_TOLERANCE: f64 = 0.01;

/// Share of total project hours assigned to each phase, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PhaseAllocation(PhaseValues);

impl Default for PhaseAllocation {
    /// 5/10/15/25/20/10/15.
    fn default() -> Self {
        Self(PhaseValues::new([5.0, 10.0, 15.0, 25.0, 20.0, 10.0, 15.0]))
    }
}

impl PhaseAllocation {
    /// Validates that percentages are finite, non-negative and sum to 100.
    ///
    /// # Errors
    /// `InvalidAllocation` with the offending total in the details.
    pub fn try_new(percentages: PhaseValues) -> Result<Self, DomainError> {
        if let Some((phase, value)) = percentages
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(DomainError::new(
                ErrorCode::InvalidAllocation,
                format!("Allocation for {} must be a non-negative number, got {}", phase, value),
            )
            .with_detail("phase", phase.key()));
        }

        let total = percentages.sum();
        if (total - 100.0).abs() > ALLOCATION_TOLERANCE {
            return Err(DomainError::new(
                ErrorCode::InvalidAllocation,
                format!("Phase allocation must sum to 100%, got {:.2}%", total),
            )
            .with_detail("total", format!("{:.2}", total)));
        }

        Ok(Self(percentages))
    }

    pub fn percentages(&self) -> &PhaseValues {
        &self.0
    }

    pub fn get(&self, phase: Phase) -> f64 {
        self.0[phase]
    }

    /// `total_hours × pct / 100` for every phase.
    pub fn baseline_hours(&self, total_hours: f64) -> PhaseValues {
        self.0.map(|_, pct| total_hours * pct / 100.0)
    }
}

impl<'de> Deserialize<'de> for PhaseAllocation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use std::collections::BTreeMap;

        let raw = BTreeMap::<Phase, f64>::deserialize(deserializer)?;
        let mut percentages = PhaseValues::ZERO;
        for phase in Phase::all() {
            percentages[*phase] = *raw
                .get(phase)
                .ok_or_else(|| serde::de::Error::custom(format!("missing allocation for phase '{}'", phase.key())))?;
        }
        Ok(Self(percentages))
    }
}

/// Baseline and modeled hours for every phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseHours {
    pub baseline: PhaseValues,
    /// Never negative.
    pub modeled: PhaseValues,
}

impl PhaseHours {
    pub fn total_baseline(&self) -> f64 {
        self.baseline.sum()
    }

    pub fn total_modeled(&self) -> f64 {
        self.modeled.sum()
    }
}

/// Hour projection functions.
pub struct PhaseProjector;

impl PhaseProjector {
    /// Projects hours for a project of `total_hours`.
    ///
    /// # Edge Cases
    /// - Deltas larger than the baseline floor the phase at 0 hours.
    pub fn project(
        total_hours: f64,
        allocation: &PhaseAllocation,
        effective: &DeltaMatrix,
    ) -> PhaseHours {
        let baseline = allocation.baseline_hours(total_hours);
        let modeled = baseline.map(|phase, hours| (hours + effective.column_sum(phase)).max(0.0));
        PhaseHours { baseline, modeled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::efficiency::impact_matrix::ImpactMatrix;
    use crate::domain::foundation::Initiative;

    #[test]
    fn default_allocation_sums_to_hundred() {
        assert_eq!(PhaseAllocation::default().percentages().sum(), 100.0);
        assert!(PhaseAllocation::try_new(*PhaseAllocation::default().percentages()).is_ok());
    }

    #[test]
    fn allocation_within_tolerance_is_accepted() {
        let values = PhaseValues::new([5.0, 10.0, 15.0, 25.0, 20.0, 10.0, 15.005]);
        assert!(PhaseAllocation::try_new(values).is_ok());
    }

    #[test]
    fn allocation_off_total_is_rejected() {
        let values = PhaseValues::new([5.0, 10.0, 15.0, 25.0, 20.0, 10.0, 10.0]);
        let err = PhaseAllocation::try_new(values).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAllocation);
        assert_eq!(err.details.get("total"), Some(&"95.00".to_string()));
    }

    #[test]
    fn negative_allocation_is_rejected() {
        let values = PhaseValues::new([-5.0, 20.0, 15.0, 25.0, 20.0, 10.0, 15.0]);
        let err = PhaseAllocation::try_new(values).unwrap_err();
        assert_eq!(err.details.get("phase"), Some(&"discover".to_string()));
    }

    #[test]
    fn baseline_hours_follow_allocation() {
        let baseline = PhaseAllocation::default().baseline_hours(17054.0);
        assert!((baseline[Phase::Test] - 3410.8).abs() < 1e-9);
        assert!((baseline.sum() - 17054.0).abs() < 1e-9);
    }

    #[test]
    fn modeled_hours_apply_column_sums() {
        let seed = ImpactMatrix::seed();
        let hours = PhaseProjector::project(17054.0, &PhaseAllocation::default(), seed.deltas());
        assert!((hours.modeled[Phase::Discover] - (852.7 - 112.0)).abs() < 1e-9);
    }

    #[test]
    fn modeled_hours_floor_at_zero() {
        let mut deltas = DeltaMatrix::ZERO;
        deltas[(Initiative::AutomatedTesting, Phase::Test)] = -5000.0;
        let hours = PhaseProjector::project(1000.0, &PhaseAllocation::default(), &deltas);
        assert_eq!(hours.modeled[Phase::Test], 0.0);
        assert_eq!(hours.modeled[Phase::Build], 250.0);
    }

    #[test]
    fn deserializes_from_phase_map() {
        let json = r#"{"discover":5,"plan":10,"design":15,"build":25,"test":20,"deploy":10,"post_go_live":15}"#;
        let allocation: PhaseAllocation = serde_json::from_str(json).unwrap();
        assert_eq!(allocation, PhaseAllocation::default());
    }

    #[test]
    fn deserialize_requires_every_phase() {
        let json = r#"{"discover":100}"#;
        assert!(serde_json::from_str::<PhaseAllocation>(json).is_err());
    }
}
