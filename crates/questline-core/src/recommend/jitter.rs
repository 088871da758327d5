//! Random jitter for recommendation scores.
//!
//! The jitter term keeps repeated recommendations with an unchanged history
//! from going stale. The source is passed in by the caller so tests can fix
//! it to zero or to a seed.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Source of the jitter term.
pub trait JitterSource {
    /// A value in `[0, span)`; `0.0` when `span` is not positive.
    fn jitter(&mut self, span: f64) -> f64;
}

/// Always returns zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&mut self, _span: f64) -> f64 {
        0.0
    }
}

/// Uniform jitter drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<Mcg128Xsl64> {
    /// Reproducible jitter from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Mcg128Xsl64::seed_from_u64(seed))
    }

    /// Jitter seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(Mcg128Xsl64::from_entropy())
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn jitter(&mut self, span: f64) -> f64 {
        if span.is_nan() || span <= 0.0 {
            return 0.0;
        }
        self.rng.gen::<f64>() * span
    }
}
