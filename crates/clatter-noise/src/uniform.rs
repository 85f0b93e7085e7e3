//! Symmetric uniform noise.

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Uniform as UniformDist;

use crate::source::{NoiseSource, finite_or_zero};

/// Uniform random in `[-|intensity|, |intensity|]`.
///
/// Draws a unit variate from `[-1, 1]` and scales it, so very large
/// intensities never build an overflowing range.  Zero intensity returns
/// `0.0`; non-finite intensity returns the `0.0` sentinel.
#[derive(Debug, Clone)]
pub struct UniformNoise<R = ChaCha8Rng> {
    intensity: f64,
    unit: UniformDist<f64>,
    rng: RefCell<R>,
}

impl UniformNoise {
    /// Create a source seeded from OS entropy.
    pub fn new(intensity: f64) -> Self {
        tracing::debug!(intensity, "uniform noise source (entropy-seeded)");
        Self::from_rng(intensity, ChaCha8Rng::from_entropy())
    }

    /// Create a reproducible source.
    pub fn seeded(intensity: f64, seed: u64) -> Self {
        tracing::debug!(intensity, seed, "uniform noise source");
        Self::from_rng(intensity, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformNoise<R> {
    /// Create a source drawing from a caller-supplied generator.
    pub fn from_rng(intensity: f64, rng: R) -> Self {
        Self {
            intensity,
            unit: UniformDist::new_inclusive(-1.0, 1.0),
            rng: RefCell::new(rng),
        }
    }

    /// Half-width of the support, `|intensity|`.
    pub const fn half_range(&self) -> f64 {
        self.intensity.abs()
    }
}

impl<R: Rng> NoiseSource for UniformNoise<R> {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn sample(&self) -> f32 {
        let half = self.half_range();
        if half == 0.0 {
            return 0.0;
        }
        if !half.is_finite() {
            return finite_or_zero(half);
        }
        let u: f64 = self.rng.borrow_mut().sample(&self.unit);
        finite_or_zero(u * half)
    }

    fn is_stateful(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
