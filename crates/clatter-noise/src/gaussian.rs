//! Zero-mean Gaussian noise.

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::source::{NoiseSource, finite_or_zero};

/// Additive Gaussian: `N(0, intensity²)`.
///
/// Each draw is a standard-normal variate scaled by `intensity`, so a
/// negative intensity has the same spread as its absolute value.  Zero
/// intensity returns `0.0` without touching the generator.
///
/// The generator lives in a private [`RefCell`]: the source is `Send` but not
/// `Sync`.  Draws from a seeded instance form a reproducible sequence, so
/// repeated calls are not idempotent.
#[derive(Debug, Clone)]
pub struct GaussianNoise<R = ChaCha8Rng> {
    intensity: f64,
    rng: RefCell<R>,
}

impl GaussianNoise {
    /// Create a source seeded from OS entropy.
    pub fn new(intensity: f64) -> Self {
        tracing::debug!(intensity, "gaussian noise source (entropy-seeded)");
        Self::from_rng(intensity, ChaCha8Rng::from_entropy())
    }

    /// Create a reproducible source.
    pub fn seeded(intensity: f64, seed: u64) -> Self {
        tracing::debug!(intensity, seed, "gaussian noise source");
        Self::from_rng(intensity, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GaussianNoise<R> {
    /// Create a source drawing from a caller-supplied generator.
    pub const fn from_rng(intensity: f64, rng: R) -> Self {
        Self {
            intensity,
            rng: RefCell::new(rng),
        }
    }

    /// Standard deviation of the draws, `|intensity|`.
    pub const fn std_dev(&self) -> f64 {
        self.intensity.abs()
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn sample(&self) -> f32 {
        if self.intensity == 0.0 {
            return 0.0;
        }
        let z: f64 = self.rng.borrow_mut().sample(StandardNormal);
        finite_or_zero(z * self.intensity)
    }

    fn is_stateful(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
