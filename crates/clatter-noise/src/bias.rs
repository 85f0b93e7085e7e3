//! Constant bias noise.

use std::cell::{Cell, RefCell};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::source::{NoiseSource, finite_or_zero};

/// Constant offset drawn from `N(0, intensity²)`.
///
/// The offset is drawn once at construction and returned by every
/// [`sample`](NoiseSource::sample) until [`rebias`](Self::rebias) draws a new
/// one, typically at an episode boundary.
#[derive(Debug, Clone)]
pub struct BiasNoise<R = ChaCha8Rng> {
    intensity: f64,
    offset: Cell<f32>,
    rng: RefCell<R>,
}

impl BiasNoise {
    /// Create a source seeded from OS entropy.
    pub fn new(intensity: f64) -> Self {
        tracing::debug!(intensity, "bias noise source (entropy-seeded)");
        Self::from_rng(intensity, ChaCha8Rng::from_entropy())
    }

    /// Create a reproducible source.
    pub fn seeded(intensity: f64, seed: u64) -> Self {
        tracing::debug!(intensity, seed, "bias noise source");
        Self::from_rng(intensity, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BiasNoise<R> {
    /// Create a source drawing from a caller-supplied generator.
    pub fn from_rng(intensity: f64, rng: R) -> Self {
        let bias = Self {
            intensity,
            offset: Cell::new(0.0),
            rng: RefCell::new(rng),
        };
        bias.rebias();
        bias
    }

    /// Draw a new offset.
    pub fn rebias(&self) {
        let offset = if self.intensity == 0.0 {
            0.0
        } else {
            let z: f64 = self.rng.borrow_mut().sample(StandardNormal);
            finite_or_zero(z * self.intensity)
        };
        self.offset.set(offset);
    }

    /// The offset currently returned by `sample()`.
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }
}

impl<R: Rng> NoiseSource for BiasNoise<R> {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn sample(&self) -> f32 {
        self.offset.get()
    }

    fn is_stateful(&self) -> bool {
        true
    }

    fn reset(&self) {
        self.rebias();
    }
}
