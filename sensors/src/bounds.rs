//! Closed intervals and saturating clamps.

use crate::error::{SensorError, SensorResult};

/// A closed interval `[lo, hi]` of finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBounds", into = "RawBounds"))]
pub struct Bounds {
    lo: f64,
    hi: f64,
}

impl Bounds {
    /// Creates a validated interval.
    pub fn new(lo: f64, hi: f64) -> SensorResult<Self> {
        // The width must be finite too, or uniform sampling over it overflows.
        if !lo.is_finite() || !hi.is_finite() || lo > hi || !(hi - lo).is_finite() {
            return Err(SensorError::InvalidBounds { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Interval used for literal constants known to be valid.
    pub(crate) const fn from_const(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    #[must_use]
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    #[must_use]
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    /// Pins `value` at the nearest bound when it falls outside.
    ///
    /// The excess is discarded, never wrapped or reflected.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.hi).max(self.lo)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.lo..=self.hi).contains(&value)
    }

    /// Returns true when `value` sits exactly on either bound.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_saturated(&self, value: f64) -> bool {
        value == self.lo || value == self.hi
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawBounds {
    lo: f64,
    hi: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for Bounds {
    type Error = SensorError;

    fn try_from(raw: RawBounds) -> SensorResult<Self> {
        Self::new(raw.lo, raw.hi)
    }
}

#[cfg(feature = "serde")]
impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        Self {
            lo: bounds.lo,
            hi: bounds.hi,
        }
    }
}
