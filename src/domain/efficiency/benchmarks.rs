//! Industry benchmark factors used by the scenario scaler.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Relative cost of fixing a defect by the stage it is found in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefectFixCostMultipliers {
    pub unit_test: f64,
    pub system_test: f64,
    pub production: f64,
}

impl Default for DefectFixCostMultipliers {
    fn default() -> Self {
        Self {
            unit_test: 10.0,
            system_test: 40.0,
            production: 70.0,
        }
    }
}

/// Research-based improvement factors, all fractional.
///
/// Defaults come from Gartner/Forrester, McKinsey, Perfecto/Testlio and IBM studies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryBenchmarks {
    /// Testing time reduction from automation, 0.1..=0.8.
    pub testing_phase_reduction: f64,
    /// Manual testing effort eliminated, 0.1..=0.7.
    pub manual_testing_reduction: f64,
    /// Quality improvement from shift-left practices, 0.05..=0.5.
    pub quality_improvement: f64,
    /// Post-release defect reduction, 0.1..=0.6.
    pub post_release_defect_reduction: f64,
    pub test_automation_cost_reduction: f64,
    pub defect_fix_cost_multipliers: DefectFixCostMultipliers,
}

impl Default for IndustryBenchmarks {
    fn default() -> Self {
        Self {
            testing_phase_reduction: 0.45,
            manual_testing_reduction: 0.40,
            quality_improvement: 0.20,
            post_release_defect_reduction: 0.25,
            test_automation_cost_reduction: 0.15,
            defect_fix_cost_multipliers: DefectFixCostMultipliers::default(),
        }
    }
}

impl IndustryBenchmarks {
    /// Rejects values outside the documented ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range("testing_phase_reduction", self.testing_phase_reduction, 0.1, 0.8)?;
        ValidationError::check_range("manual_testing_reduction", self.manual_testing_reduction, 0.1, 0.7)?;
        ValidationError::check_range("quality_improvement", self.quality_improvement, 0.05, 0.5)?;
        ValidationError::check_range(
            "post_release_defect_reduction",
            self.post_release_defect_reduction,
            0.1,
            0.6,
        )?;
        ValidationError::check_range(
            "test_automation_cost_reduction",
            self.test_automation_cost_reduction,
            0.0,
            1.0,
        )?;
        let multipliers = &self.defect_fix_cost_multipliers;
        for (field, value) in [
            ("defect_fix_cost_multipliers.unit_test", multipliers.unit_test),
            ("defect_fix_cost_multipliers.system_test", multipliers.system_test),
            ("defect_fix_cost_multipliers.production", multipliers.production),
        ] {
            ValidationError::check_range(field, value, 0.0, 1000.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(IndustryBenchmarks::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_testing_reduction_is_rejected() {
        let benchmarks = IndustryBenchmarks {
            testing_phase_reduction: 0.9,
            ..Default::default()
        };
        match benchmarks.validate() {
            Err(ValidationError::OutOfRange { field, .. }) => {
                assert_eq!(field, "testing_phase_reduction")
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn negative_multiplier_is_rejected() {
        let mut benchmarks = IndustryBenchmarks::default();
        benchmarks.defect_fix_cost_multipliers.production = -1.0;
        assert!(benchmarks.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let benchmarks: IndustryBenchmarks =
            serde_json::from_str(r#"{"quality_improvement": 0.3}"#).unwrap();
        assert_eq!(benchmarks.quality_improvement, 0.3);
        assert_eq!(benchmarks.testing_phase_reduction, 0.45);
    }
}
