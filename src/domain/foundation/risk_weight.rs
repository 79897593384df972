//! Risk weight value object (0.5x to 10x multiplier).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Multiplier reflecting estimation risk for a phase.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskWeight(f64);

impl RiskWeight {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 10.0;

    /// Pass-through weight.
    pub const NEUTRAL: Self = Self(1.0);

    /// Creates a RiskWeight, returning error if outside 0.5..=10.0.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        ValidationError::check_range("risk_weight", value, Self::MIN, Self::MAX).map(Self)
    }

    /// Returns the multiplier.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the guidance text for this weight band.
    pub fn label(&self) -> &'static str {
        match self.0 {
            v if v <= 0.7 => "Very low risk - Simple, well-understood work",
            v if v <= 1.2 => "Low risk - Standard complexity, experienced team",
            v if v <= 2.5 => "Moderate risk - Some complexity or unknowns",
            v if v <= 4.0 => "Medium-high risk - Significant complexity",
            v if v <= 6.0 => "High risk - Major complexity, new technology",
            v if v <= 8.0 => "Very high risk - Critical path, many unknowns",
            _ => "Maximum risk - Experimental, high uncertainty",
        }
    }
}

impl Default for RiskWeight {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<f64> for RiskWeight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<RiskWeight> for f64 {
    fn from(value: RiskWeight) -> Self {
        value.0
    }
}

impl fmt::Display for RiskWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_bounds() {
        assert_eq!(RiskWeight::try_new(0.5).unwrap().value(), 0.5);
        assert_eq!(RiskWeight::try_new(10.0).unwrap().value(), 10.0);
    }

    #[test]
    fn try_new_rejects_outside_bounds() {
        assert!(RiskWeight::try_new(0.49).is_err());
        assert!(RiskWeight::try_new(10.5).is_err());
        assert!(RiskWeight::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn default_is_pass_through() {
        assert_eq!(RiskWeight::default().value(), 1.0);
    }

    #[test]
    fn label_follows_weight_bands() {
        assert!(RiskWeight::try_new(0.5).unwrap().label().starts_with("Very low"));
        assert!(RiskWeight::try_new(1.0).unwrap().label().starts_with("Low"));
        assert!(RiskWeight::try_new(2.0).unwrap().label().starts_with("Moderate"));
        assert!(RiskWeight::try_new(3.0).unwrap().label().starts_with("Medium-high"));
        assert!(RiskWeight::try_new(5.0).unwrap().label().starts_with("High"));
        assert!(RiskWeight::try_new(7.0).unwrap().label().starts_with("Very high"));
        assert!(RiskWeight::try_new(9.5).unwrap().label().starts_with("Maximum"));
    }

    #[test]
    fn displays_as_multiplier() {
        assert_eq!(format!("{}", RiskWeight::try_new(2.5).unwrap()), "2.5x");
    }

    #[test]
    fn deserialization_validates_range() {
        let weight: RiskWeight = serde_json::from_str("3.5").unwrap();
        assert_eq!(weight.value(), 3.5);
        assert!(serde_json::from_str::<RiskWeight>("0.1").is_err());
    }
}
