//! Dead-reckoning integration of acceleration samples.

use crate::axes::Axes;
use crate::error::{SensorError, SensorResult};

/// Default integration step in seconds, matching a one-second display loop.
pub const DEFAULT_DT: f64 = 1.0;

/// Integrates acceleration into velocity, then velocity into position.
///
/// Uses semi-implicit Euler: `v += a * dt`, then `p += v * dt`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadReckoning {
    dt: f64,
    velocity: Axes,
    position: Axes,
}

impl DeadReckoning {
    pub fn new(dt: f64) -> SensorResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SensorError::InvalidTimeStep { dt });
        }
        Ok(Self {
            dt,
            velocity: Axes::ZERO,
            position: Axes::ZERO,
        })
    }

    pub const fn dt(&self) -> f64 {
        self.dt
    }

    pub const fn velocity(&self) -> Axes {
        self.velocity
    }

    pub const fn position(&self) -> Axes {
        self.position
    }

    /// Applies one acceleration sample and returns the new position.
    pub fn integrate(&mut self, acceleration: Axes) -> Axes {
        let Self {
            dt,
            velocity,
            position,
        } = *self;
        let velocity = velocity.zip_with(acceleration, |v, a| a.mul_add(dt, v));
        let position = position.zip_with(velocity, |p, v| v.mul_add(dt, p));
        self.velocity = velocity;
        self.position = position;
        position
    }
}

impl Default for DeadReckoning {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            velocity: Axes::ZERO,
            position: Axes::ZERO,
        }
    }
}
