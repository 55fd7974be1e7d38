//! Accelerometer/magnetometer module stand-in.

use crate::axes::Axes;
use crate::error::SensorResult;
use crate::field::FieldConfig;
use crate::source::UniformSource;
use crate::walk::{BoundedWalk, WalkConfig, WalkStep};

/// Simulated nine-axis module exposing acceleration and magnetic field.
///
/// The instance owns its walk state and random source; whoever constructs it
/// has exclusive access and passes it to consumers explicitly.
#[derive(Debug, Clone)]
pub struct ImuSimulator<S> {
    walk: BoundedWalk,
    field: FieldConfig,
    source: S,
}

impl<S: UniformSource> ImuSimulator<S> {
    pub fn new(walk: WalkConfig, field: FieldConfig, source: S) -> SensorResult<Self> {
        Ok(Self::from_walk(BoundedWalk::new(walk)?, field, source))
    }

    /// Builds a module around an existing walk, keeping its current state.
    pub const fn from_walk(walk: BoundedWalk, field: FieldConfig, source: S) -> Self {
        Self {
            walk,
            field,
            source,
        }
    }

    pub const fn walk(&self) -> &BoundedWalk {
        &self.walk
    }

    pub const fn acceleration(&self) -> Axes {
        self.walk.state()
    }

    /// Advances the acceleration walk and returns the clamped reading.
    pub fn next_acceleration_sample(&mut self) -> Axes {
        self.walk.next_acceleration_sample(&mut self.source)
    }

    /// Like [`Self::next_acceleration_sample`], also reporting the raw step.
    pub fn next_acceleration_step(&mut self) -> WalkStep {
        self.walk.step(&mut self.source)
    }

    /// Draws a fresh magnetometer reading.
    pub fn next_field_sample(&mut self) -> Axes {
        self.field.next_field_sample(&mut self.source)
    }
}
