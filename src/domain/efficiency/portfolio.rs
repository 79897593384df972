//! Initiative portfolio and the maturity scaler.

use serde::{Deserialize, Serialize};

use super::impact_matrix::{DeltaMatrix, ImpactMatrix};
use crate::domain::foundation::{Initiative, Percentage, ValidationError, INITIATIVE_COUNT};

/// How one initiative participates in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitiativeSetting {
    pub enabled: bool,
    /// Relevance to the project, 0.0..=1.0.
    pub weight: f64,
    /// Adoption maturity, 0-100%.
    pub maturity: Percentage,
}

impl Default for InitiativeSetting {
    fn default() -> Self {
        Self {
            enabled: true,
            weight: 1.0,
            maturity: Percentage::new(50.0),
        }
    }
}

impl InitiativeSetting {
    /// An enabled initiative at full weight.
    pub fn at(maturity: Percentage) -> Self {
        Self {
            maturity,
            ..Default::default()
        }
    }

    /// A disabled initiative.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            weight: 0.0,
            maturity: Percentage::ZERO,
        }
    }

    /// True when the initiative is switched on with a positive weight.
    pub fn is_selected(&self) -> bool {
        self.enabled && self.weight > 0.0
    }

    /// Maturity fed into the model; zero for unselected initiatives.
    pub fn effective_maturity(&self) -> Percentage {
        if self.is_selected() {
            self.maturity
        } else {
            Percentage::ZERO
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range("initiative_weight", self.weight, 0.0, 1.0)?;
        Ok(())
    }
}

/// Settings for all seven initiatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitiativePortfolio([InitiativeSetting; INITIATIVE_COUNT]);

impl Default for InitiativePortfolio {
    /// Every initiative enabled at 50% maturity.
    fn default() -> Self {
        Self::uniform(Percentage::new(50.0))
    }
}

impl InitiativePortfolio {
    /// Every initiative enabled at the same maturity.
    pub fn uniform(maturity: Percentage) -> Self {
        Self([InitiativeSetting::at(maturity); INITIATIVE_COUNT])
    }

    /// Replaces one initiative's setting.
    pub fn with(mut self, initiative: Initiative, setting: InitiativeSetting) -> Self {
        self.0[initiative.order_index()] = setting;
        self
    }

    pub fn setting(&self, initiative: Initiative) -> &InitiativeSetting {
        &self.0[initiative.order_index()]
    }

    /// Effective maturity for an initiative.
    pub fn maturity(&self, initiative: Initiative) -> Percentage {
        self.setting(initiative).effective_maturity()
    }

    /// Initiatives counted toward feasibility, in canonical order.
    pub fn selected(&self) -> Vec<Initiative> {
        Initiative::all()
            .iter()
            .filter(|i| self.setting(**i).is_selected())
            .copied()
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.0.iter().try_for_each(InitiativeSetting::validate)
    }
}

/// Scales the seed matrix by per-initiative maturity.
pub struct MaturityScaler;

impl MaturityScaler {
    /// Multiplies each initiative row by its maturity fraction.
    ///
    /// 0% yields an all-zero row; 100% reproduces the seed row.
    pub fn apply(matrix: &ImpactMatrix, portfolio: &InitiativePortfolio) -> DeltaMatrix {
        let mut effective = *matrix.deltas();
        for initiative in Initiative::all() {
            effective.scale_row(*initiative, portfolio.maturity(*initiative).as_fraction());
        }
        effective
    }
}
