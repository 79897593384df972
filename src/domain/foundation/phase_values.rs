//! Per-phase numeric values backed by a fixed-size array.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::{Index, IndexMut};

use super::phase::{Phase, PHASE_COUNT};

/// One `f64` for each phase, indexed by [`Phase`].
///
/// Serializes as a map keyed by the phase's snake_case key, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseValues([f64; PHASE_COUNT]);

impl PhaseValues {
    /// All phases set to zero.
    pub const ZERO: Self = Self([0.0; PHASE_COUNT]);

    /// Creates from raw values in canonical phase order.
    pub const fn new(values: [f64; PHASE_COUNT]) -> Self {
        Self(values)
    }

    /// Builds values by evaluating `f` for each phase.
    pub fn from_fn(mut f: impl FnMut(Phase) -> f64) -> Self {
        let mut values = [0.0; PHASE_COUNT];
        for phase in Phase::all() {
            values[phase.order_index()] = f(*phase);
        }
        Self(values)
    }

    /// Every phase set to the same value.
    pub fn splat(value: f64) -> Self {
        Self([value; PHASE_COUNT])
    }

    /// Iterates `(phase, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, f64)> + '_ {
        Phase::all().iter().map(move |p| (*p, self.0[p.order_index()]))
    }

    /// Sum across all phases.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sum across development phases (all but post go-live).
    pub fn development_sum(&self) -> f64 {
        Phase::development().iter().map(|p| self[*p]).sum()
    }

    /// Applies `f` to every value.
    pub fn map(&self, mut f: impl FnMut(Phase, f64) -> f64) -> Self {
        Self::from_fn(|p| f(p, self[p]))
    }

    /// Returns the raw array in canonical order.
    pub fn as_array(&self) -> &[f64; PHASE_COUNT] {
        &self.0
    }
}

impl Index<Phase> for PhaseValues {
    type Output = f64;

    fn index(&self, phase: Phase) -> &f64 {
        &self.0[phase.order_index()]
    }
}

impl IndexMut<Phase> for PhaseValues {
    fn index_mut(&mut self, phase: Phase) -> &mut f64 {
        &mut self.0[phase.order_index()]
    }
}

impl Serialize for PhaseValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PHASE_COUNT))?;
        for (phase, value) in self.iter() {
            map.serialize_entry(phase.key(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_by_phase() {
        let mut values = PhaseValues::ZERO;
        values[Phase::Test] = 12.0;
        assert_eq!(values[Phase::Test], 12.0);
        assert_eq!(values.as_array()[4], 12.0);
    }

    #[test]
    fn sums_split_development_and_total() {
        let values = PhaseValues::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(values.sum(), 28.0);
        assert_eq!(values.development_sum(), 21.0);
    }

    #[test]
    fn map_keeps_phase_alignment() {
        let values = PhaseValues::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let doubled = values.map(|_, v| v * 2.0);
        assert_eq!(doubled[Phase::PostGoLive], 14.0);
    }

    #[test]
    fn serializes_as_ordered_map() {
        let values = PhaseValues::splat(1.5);
        let json = serde_json::to_string(&values).unwrap();
        assert!(json.starts_with("{\"discover\":1.5,\"plan\":1.5"));
        assert!(json.ends_with("\"post_go_live\":1.5}"));
    }
}
