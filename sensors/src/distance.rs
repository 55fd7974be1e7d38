//! Ultrasonic rangefinder stand-in.

use crate::bounds::Bounds;
use crate::error::{SensorError, SensorResult};
use crate::source::UniformSource;

/// Typical working range of an HC-SR04 style rangefinder, in centimetres.
pub const DISTANCE_BOUNDS_CM: Bounds = Bounds::from_const(2.0, 400.0);

/// Something that can report a distance in centimetres.
///
/// Readings are non-negative and measuring never fails.
pub trait DistanceSensor {
    fn measure_distance(&mut self) -> f64;
}

impl<T: DistanceSensor + ?Sized> DistanceSensor for &mut T {
    fn measure_distance(&mut self) -> f64 {
        (**self).measure_distance()
    }
}

impl<T: DistanceSensor + ?Sized> DistanceSensor for Box<T> {
    fn measure_distance(&mut self) -> f64 {
        (**self).measure_distance()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DistanceConfig {
    pub bounds: Bounds,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            bounds: DISTANCE_BOUNDS_CM,
        }
    }
}

impl DistanceConfig {
    pub fn validate(&self) -> SensorResult<()> {
        if self.bounds.lo() < 0.0 {
            return Err(SensorError::NegativeDistance {
                lo: self.bounds.lo(),
            });
        }
        Ok(())
    }
}

/// Uniform draws over the configured range, no memory between readings.
#[derive(Debug, Clone)]
pub struct UltrasonicSimulator<S> {
    config: DistanceConfig,
    source: S,
}

impl<S: UniformSource> UltrasonicSimulator<S> {
    pub fn new(config: DistanceConfig, source: S) -> SensorResult<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub const fn config(&self) -> &DistanceConfig {
        &self.config
    }

    /// Draws one distance reading in centimetres.
    pub fn next_distance_sample(&mut self) -> f64 {
        self.source
            .uniform(self.config.bounds.lo(), self.config.bounds.hi())
    }
}

impl<S: UniformSource> DistanceSensor for UltrasonicSimulator<S> {
    fn measure_distance(&mut self) -> f64 {
        self.next_distance_sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, ScriptedSource};

    #[test]
    fn readings_stay_in_default_range() {
        let mut sensor =
            UltrasonicSimulator::new(DistanceConfig::default(), RngSource::seeded(21)).unwrap();
        for _ in 0..500 {
            let distance = sensor.measure_distance();
            assert!(distance >= 0.0);
            assert!(DISTANCE_BOUNDS_CM.contains(distance));
        }
    }

    #[test]
    fn rejects_negative_lower_bound() {
        let config = DistanceConfig {
            bounds: Bounds::new(-1.0, 10.0).unwrap(),
        };
        let err = UltrasonicSimulator::new(config, ScriptedSource::default()).unwrap_err();
        assert_eq!(err, SensorError::NegativeDistance { lo: -1.0 });
    }

    #[test]
    fn trait_object_measures() {
        let sensor =
            UltrasonicSimulator::new(DistanceConfig::default(), ScriptedSource::constant(123.45))
                .unwrap();
        let mut boxed: Box<dyn DistanceSensor> = Box::new(sensor);
        assert_eq!(boxed.measure_distance(), 123.45);
    }

    #[test]
    fn draws_once_per_reading() {
        let mut source = ScriptedSource::constant(50.0);
        {
            let mut sensor =
                UltrasonicSimulator::new(DistanceConfig::default(), &mut source).unwrap();
            sensor.next_distance_sample();
            sensor.next_distance_sample();
        }
        assert_eq!(source.draws(), 2);
    }
}
