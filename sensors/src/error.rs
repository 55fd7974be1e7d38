//! Configuration errors for the sensor stand-ins.

use std::fmt;

/// Result type for sensor construction and validation.
pub type SensorResult<T> = Result<T, SensorError>;

/// Errors that can occur when building or validating a sensor configuration.
///
/// Sampling itself never fails; these only surface at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorError {
    /// Interval bounds are non-finite or inverted.
    InvalidBounds {
        /// Lower bound provided.
        lo: f64,
        /// Upper bound provided.
        hi: f64,
    },

    /// Maximum walk step is negative or non-finite.
    InvalidStep {
        /// The rejected step size.
        max_step: f64,
    },

    /// An initial walk state lies outside the walk bounds.
    StateOutOfBounds {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// The offending value.
        value: f64,
        /// Lower bound.
        lo: f64,
        /// Upper bound.
        hi: f64,
    },

    /// Integration time step is zero, negative or non-finite.
    InvalidTimeStep {
        /// The rejected time step in seconds.
        dt: f64,
    },

    /// A distance range would allow negative readings.
    NegativeDistance {
        /// The rejected lower bound in centimetres.
        lo: f64,
    },
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { lo, hi } => {
                write!(f, "invalid bounds [{lo}, {hi}]: expected finite lo <= hi")
            }
            Self::InvalidStep { max_step } => {
                write!(f, "invalid max step {max_step}: expected finite value >= 0")
            }
            Self::StateOutOfBounds {
                axis,
                value,
                lo,
                hi,
            } => {
                write!(f, "initial {axis} value {value} lies outside [{lo}, {hi}]")
            }
            Self::InvalidTimeStep { dt } => {
                write!(f, "invalid time step {dt}: expected finite value > 0")
            }
            Self::NegativeDistance { lo } => {
                write!(f, "distance lower bound {lo} cm is negative")
            }
        }
    }
}

impl std::error::Error for SensorError {}
