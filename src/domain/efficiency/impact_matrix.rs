//! Impact Matrix - Initiative × Phase hour deltas.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::{Index, IndexMut};

use crate::domain::foundation::{
    DomainError, ErrorCode, Initiative, Phase, PhaseValues, INITIATIVE_COUNT,
};

/// A 7×7 table of signed hour deltas, one row per initiative.
///
/// Negative values are hours saved. Serializes as
/// `{initiative_key: {phase_key: delta}}` in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaMatrix([PhaseValues; INITIATIVE_COUNT]);

impl DeltaMatrix {
    /// All cells zero.
    pub const ZERO: Self = Self([PhaseValues::ZERO; INITIATIVE_COUNT]);

    /// Creates from rows in canonical initiative order.
    pub const fn from_rows(rows: [PhaseValues; INITIATIVE_COUNT]) -> Self {
        Self(rows)
    }

    /// Returns the row for an initiative.
    pub fn row(&self, initiative: Initiative) -> &PhaseValues {
        &self.0[initiative.order_index()]
    }

    /// Returns a mutable row for an initiative.
    pub fn row_mut(&mut self, initiative: Initiative) -> &mut PhaseValues {
        &mut self.0[initiative.order_index()]
    }

    /// Sum of a phase column across all initiatives.
    pub fn column_sum(&self, phase: Phase) -> f64 {
        self.0.iter().map(|row| row[phase]).sum()
    }

    /// Multiplies a whole phase column by `factor`.
    pub fn scale_column(&mut self, phase: Phase, factor: f64) {
        for row in self.0.iter_mut() {
            row[phase] *= factor;
        }
    }

    /// Multiplies a whole initiative row by `factor`.
    pub fn scale_row(&mut self, initiative: Initiative, factor: f64) {
        let row = self.row_mut(initiative);
        *row = row.map(|_, v| v * factor);
    }

    /// Iterates `(initiative, row)` pairs in canonical order.
    pub fn rows(&self) -> impl Iterator<Item = (Initiative, &PhaseValues)> + '_ {
        Initiative::all()
            .iter()
            .map(move |i| (*i, &self.0[i.order_index()]))
    }

    /// Sum of every cell.
    pub fn total(&self) -> f64 {
        self.0.iter().map(PhaseValues::sum).sum()
    }
}

impl Index<(Initiative, Phase)> for DeltaMatrix {
    type Output = f64;

    fn index(&self, (initiative, phase): (Initiative, Phase)) -> &f64 {
        &self.0[initiative.order_index()][phase]
    }
}

impl IndexMut<(Initiative, Phase)> for DeltaMatrix {
    fn index_mut(&mut self, (initiative, phase): (Initiative, Phase)) -> &mut f64 {
        &mut self.0[initiative.order_index()][phase]
    }
}

impl Serialize for DeltaMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(INITIATIVE_COUNT))?;
        for (initiative, row) in self.rows() {
            map.serialize_entry(initiative.key(), row)?;
        }
        map.end()
    }
}

/// The seed matrix: baseline deltas at 100% maturity and a neutral scenario.
///
/// Read-only once constructed. Every cell is finite and ≤ 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ImpactMatrix(DeltaMatrix);

impl ImpactMatrix {
    /// Validates and wraps a delta matrix.
    ///
    /// # Errors
    /// `MatrixUnavailable` if any cell is positive or not finite.
    pub fn new(deltas: DeltaMatrix) -> Result<Self, DomainError> {
        for (initiative, row) in deltas.rows() {
            for (phase, value) in row.iter() {
                if !value.is_finite() || value > 0.0 {
                    return Err(DomainError::new(
                        ErrorCode::MatrixUnavailable,
                        format!(
                            "Impact matrix cell {} / {} must be a finite value <= 0, got {}",
                            initiative, phase, value
                        ),
                    )
                    .with_detail("initiative", initiative.key())
                    .with_detail("phase", phase.key()));
                }
            }
        }
        Ok(Self(deltas))
    }

    /// The research-calibrated sample matrix.
    ///
    /// Calibrated so that 50% maturity yields roughly 8% savings and 100% roughly 16%.
    pub fn seed() -> Self {
        // Columns per phase, values in canonical initiative order.
        const COLUMNS: [[f64; INITIATIVE_COUNT]; 7] = [
            [-13.0, -10.0, -19.0, -26.0, -6.0, -16.0, -22.0],
            [-19.0, -16.0, -32.0, -38.0, -10.0, -26.0, -29.0],
            [-32.0, -26.0, -45.0, -51.0, -38.0, -35.0, -42.0],
            [-51.0, -77.0, -64.0, -96.0, -128.0, -58.0, -115.0],
            [-128.0, -115.0, -102.0, -77.0, -160.0, -64.0, -179.0],
            [-26.0, -51.0, -19.0, -38.0, -32.0, -22.0, -29.0],
            [-96.0, -64.0, -77.0, -115.0, -51.0, -58.0, -90.0],
        ];

        let mut deltas = DeltaMatrix::ZERO;
        for phase in Phase::all() {
            for initiative in Initiative::all() {
                deltas[(*initiative, *phase)] =
                    COLUMNS[phase.order_index()][initiative.order_index()];
            }
        }
        Self(deltas)
    }

    /// Returns the underlying deltas.
    pub fn deltas(&self) -> &DeltaMatrix {
        &self.0
    }

    /// Sum of an initiative's seed row.
    pub fn row_total(&self, initiative: Initiative) -> f64 {
        self.0.row(initiative).sum()
    }
}
