//! Random sources behind the sensor generators.
//!
//! Generators only ever ask for one thing: a float drawn uniformly from a
//! closed interval. Keeping that behind [`UniformSource`] lets tests swap in
//! a seeded or scripted source without touching the accumulation logic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Capability to draw a float uniformly from `[lo, hi]`.
pub trait UniformSource {
    /// Draws a value uniformly from the closed interval `[lo, hi]`.
    ///
    /// Callers guarantee `lo <= hi` and both finite.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }
}

/// Adapts any [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// Seeded streams use ChaCha8, whose output is fixed across `rand` releases
/// and platforms.
impl RngSource<ChaCha8Rng> {
    /// Deterministic source: the same seed replays the same stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from the thread-local entropy-backed generator.
    pub fn from_os_rng() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    #[allow(clippy::float_cmp)]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo == hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }
}

/// Replays a fixed list of values in order, cycling when exhausted.
///
/// The requested interval is ignored, so a script may push a walk further
/// than its configured step would allow. An empty script yields the interval
/// midpoint.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return lo + (hi - lo) / 2.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
