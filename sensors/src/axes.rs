//! Three-axis readings.

use std::fmt;

/// A three-axis value: acceleration, magnetic field, velocity or position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Axes {
    pub const ZERO: Self = Self::splat(0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Components in `x, y, z` order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn zip_with(self, other: Self, mut f: impl FnMut(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Iterates `(axis name, value)` pairs.
    pub fn named(self) -> impl Iterator<Item = (char, f64)> {
        ['x', 'y', 'z'].into_iter().zip(self.to_array())
    }
}

impl From<[f64; 3]> for Axes {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Axes {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// Formats as `x=0.00, y=0.00, z=0.00`.
///
/// The precision defaults to two decimals and follows `{:.N}` when given.
impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "x={:.p$}, y={:.p$}, z={:.p$}",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}
