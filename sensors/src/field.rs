//! Magnetometer stand-in: independent uniform draws with no memory.

use crate::axes::Axes;
use crate::bounds::Bounds;
use crate::source::UniformSource;

/// Magnetic field range of the simulated module, in µT.
pub const FIELD_BOUNDS: Bounds = Bounds::from_const(-100.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    pub bounds: Bounds,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            bounds: FIELD_BOUNDS,
        }
    }
}

impl FieldConfig {
    /// Draws `(mx, my, mz)`, each uniformly from the configured bounds.
    pub fn next_field_sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> Axes {
        let (lo, hi) = (self.bounds.lo(), self.bounds.hi());
        let mx = source.uniform(lo, hi);
        let my = source.uniform(lo, hi);
        let mz = source.uniform(lo, hi);
        Axes::new(mx, my, mz)
    }
}
