//! Bounded random walk driving the simulated accelerometer.
//!
//! Each sample adds an independent uniform step per axis to the stored value
//! and clamps the result back into the walk bounds. The stored values are
//! always inside the bounds: construction validates them and every write
//! re-clamps.

use crate::axes::Axes;
use crate::bounds::Bounds;
use crate::error::{SensorError, SensorResult};
use crate::source::UniformSource;

/// Acceleration range of the simulated module, in m/s².
pub const ACCEL_BOUNDS: Bounds = Bounds::from_const(-10.0, 10.0);

/// Largest per-axis change drawn for a single sample.
pub const ACCEL_MAX_STEP: f64 = 2.0;

/// Walk parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Range every axis is clamped into.
    pub bounds: Bounds,
    /// Steps are drawn from `[-max_step, max_step]`.
    pub max_step: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            bounds: ACCEL_BOUNDS,
            max_step: ACCEL_MAX_STEP,
        }
    }
}

impl WalkConfig {
    pub fn validate(&self) -> SensorResult<()> {
        // The step interval is `2 * max_step` wide and must stay finite.
        if !(self.max_step * 2.0).is_finite() || self.max_step < 0.0 {
            return Err(SensorError::InvalidStep {
                max_step: self.max_step,
            });
        }
        Ok(())
    }

    fn check_state(&self, state: Axes) -> SensorResult<()> {
        for (axis, value) in state.named() {
            if !self.bounds.contains(value) {
                return Err(SensorError::StateOutOfBounds {
                    axis,
                    value,
                    lo: self.bounds.lo(),
                    hi: self.bounds.hi(),
                });
            }
        }
        Ok(())
    }
}

/// Outcome of one walk update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStep {
    /// Step added before clamping.
    pub step: Axes,
    /// Stored value after clamping.
    pub sample: Axes,
}

impl WalkStep {
    /// Per-axis saturation flags of the new sample.
    pub fn saturated(&self, bounds: &Bounds) -> [bool; 3] {
        let values = self.sample.to_array();
        values.map(|value| bounds.is_saturated(value))
    }
}

/// Three-axis bounded random walk.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedWalk {
    config: WalkConfig,
    state: Axes,
}

impl Default for BoundedWalk {
    fn default() -> Self {
        Self {
            config: WalkConfig::default(),
            state: Axes::ZERO,
        }
    }
}

impl BoundedWalk {
    /// Creates a walk starting at `(0, 0, 0)`.
    ///
    /// The origin must lie inside the configured bounds.
    pub fn new(config: WalkConfig) -> SensorResult<Self> {
        Self::with_state(config, Axes::ZERO)
    }

    /// Creates a walk starting at `state`.
    pub fn with_state(config: WalkConfig, state: Axes) -> SensorResult<Self> {
        config.validate()?;
        config.check_state(state)?;
        Ok(Self { config, state })
    }

    #[must_use]
    pub const fn state(&self) -> Axes {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Draws one step per axis, in `x, y, z` order.
    pub fn draw_step<S: UniformSource + ?Sized>(&self, source: &mut S) -> Axes {
        let max_step = self.config.max_step;
        let x = source.uniform(-max_step, max_step);
        let y = source.uniform(-max_step, max_step);
        let z = source.uniform(-max_step, max_step);
        Axes::new(x, y, z)
    }

    /// Adds `step` to the stored values and clamps each axis to the bounds.
    ///
    /// Any excess past a bound is discarded, not carried into later samples.
    pub fn apply_step(&mut self, step: Axes) -> Axes {
        let bounds = self.config.bounds;
        self.state = self
            .state
            .zip_with(step, |value, delta| bounds.clamp(value + delta));
        self.state
    }

    /// Draws a step, applies it, and reports both.
    pub fn step<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> WalkStep {
        let step = self.draw_step(source);
        let sample = self.apply_step(step);
        WalkStep { step, sample }
    }

    /// Advances the walk and returns the new clamped acceleration.
    pub fn next_acceleration_sample<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> Axes {
        self.step(source).sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, ScriptedSource};

    #[test]
    fn starts_at_origin() {
        let walk = BoundedWalk::new(WalkConfig::default()).unwrap();
        assert_eq!(walk.state(), Axes::ZERO);
    }

    #[test]
    fn max_steps_reach_bound_on_fifth_sample() {
        let mut walk = BoundedWalk::default();
        let mut source = ScriptedSource::constant(2.0);
        let samples: Vec<Axes> = (0..5)
            .map(|_| walk.next_acceleration_sample(&mut source))
            .collect();
        assert_eq!(samples[3], Axes::splat(8.0));
        assert_eq!(samples[4], Axes::splat(10.0));

        for _ in 0..3 {
            assert_eq!(
                walk.next_acceleration_sample(&mut source),
                Axes::splat(10.0)
            );
        }
    }

    #[test]
    fn oversized_step_clamps_per_axis() {
        let mut walk =
            BoundedWalk::with_state(WalkConfig::default(), Axes::new(9.0, -9.0, 0.0)).unwrap();
        let mut source = ScriptedSource::new(vec![5.0, -5.0, 0.0]);
        let sample = walk.next_acceleration_sample(&mut source);
        assert_eq!(sample, Axes::new(10.0, -10.0, 0.0));
        assert_eq!(walk.state(), sample);
    }

    #[test]
    fn excess_is_not_carried_over() {
        let mut walk = BoundedWalk::with_state(WalkConfig::default(), Axes::splat(10.0)).unwrap();
        walk.apply_step(Axes::splat(7.0));
        assert_eq!(walk.apply_step(Axes::splat(-1.0)), Axes::splat(9.0));
    }

    #[test]
    fn saturated_flags_follow_bounds() {
        let mut walk =
            BoundedWalk::with_state(WalkConfig::default(), Axes::new(9.5, 0.0, -9.5)).unwrap();
        let mut source = ScriptedSource::new(vec![2.0, 2.0, -2.0]);
        let outcome = walk.step(&mut source);
        assert_eq!(outcome.step, Axes::new(2.0, 2.0, -2.0));
        assert_eq!(outcome.saturated(&ACCEL_BOUNDS), [true, false, true]);
    }

    #[test]
    fn draws_three_steps_per_sample() {
        let mut walk = BoundedWalk::default();
        let mut source = ScriptedSource::constant(0.5);
        walk.next_acceleration_sample(&mut source);
        walk.next_acceleration_sample(&mut source);
        assert_eq!(source.draws(), 6);
    }

    #[test]
    fn seeded_walks_replay() {
        let mut a = BoundedWalk::default();
        let mut b = BoundedWalk::default();
        let mut source_a = RngSource::seeded(9);
        let mut source_b = RngSource::seeded(9);
        for _ in 0..50 {
            assert_eq!(
                a.next_acceleration_sample(&mut source_a),
                b.next_acceleration_sample(&mut source_b)
            );
        }
    }

    #[test]
    fn rejects_invalid_step() {
        let config = WalkConfig {
            max_step: -1.0,
            ..WalkConfig::default()
        };
        assert_eq!(
            BoundedWalk::new(config),
            Err(SensorError::InvalidStep { max_step: -1.0 })
        );
    }

    #[test]
    fn rejects_step_with_infinite_width() {
        let config = WalkConfig {
            max_step: 1e308,
            ..WalkConfig::default()
        };
        assert_eq!(
            BoundedWalk::new(config),
            Err(SensorError::InvalidStep { max_step: 1e308 })
        );

        let config = WalkConfig {
            max_step: f64::MAX / 2.0,
            ..WalkConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_state_outside_bounds() {
        let err =
            BoundedWalk::with_state(WalkConfig::default(), Axes::new(0.0, 11.0, 0.0)).unwrap_err();
        assert!(matches!(err, SensorError::StateOutOfBounds { axis: 'y', .. }));
    }

    #[test]
    fn rejects_origin_outside_bounds() {
        let config = WalkConfig {
            bounds: Bounds::new(1.0, 5.0).unwrap(),
            ..WalkConfig::default()
        };
        assert!(BoundedWalk::new(config).is_err());
    }

    #[test]
    fn zero_step_walk_stays_put() {
        let config = WalkConfig {
            max_step: 0.0,
            ..WalkConfig::default()
        };
        let mut walk = BoundedWalk::new(config).unwrap();
        let mut source = RngSource::seeded(3);
        assert_eq!(walk.next_acceleration_sample(&mut source), Axes::ZERO);
    }
}
