//! Simulated accelerometer/magnetometer and ultrasonic rangefinder.
//!
//! This crate produces sensor-like readings without any hardware:
//! - A bounded random walk standing in for a drifting three-axis accelerometer
//! - Memoryless uniform draws for the magnetometer and the rangefinder
//! - A dead-reckoning tracker that integrates acceleration into position
//!
//! # Design Principles
//!
//! - **Injectable randomness** - Every generator draws through [`UniformSource`],
//!   so a seeded or scripted source makes runs reproducible.
//! - **Explicit ownership** - Sensors are plain values owned by their caller;
//!   there is no global instance.
//! - **Infallible sampling** - Only construction validates; sampling cannot fail.

mod axes;
mod bounds;
mod distance;
mod error;
mod field;
mod imu;
mod source;
mod tracker;
mod walk;

pub use axes::Axes;
pub use bounds::Bounds;
pub use distance::{DistanceConfig, DistanceSensor, UltrasonicSimulator, DISTANCE_BOUNDS_CM};
pub use error::{SensorError, SensorResult};
pub use field::{FieldConfig, FIELD_BOUNDS};
pub use imu::ImuSimulator;
pub use source::{RngSource, ScriptedSource, UniformSource};
pub use tracker::{DeadReckoning, DEFAULT_DT};
pub use walk::{BoundedWalk, WalkConfig, WalkStep, ACCEL_BOUNDS, ACCEL_MAX_STEP};
