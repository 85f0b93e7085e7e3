//! Null-behavior noise.

use crate::source::NoiseSource;

/// Always returns `0.0`, whatever the intensity.
///
/// A pure function of nothing: `ZeroNoise` is `Sync` and is safe to sample
/// concurrently through an `Arc`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZeroNoise {
    intensity: f64,
}

impl ZeroNoise {
    pub const fn new(intensity: f64) -> Self {
        Self { intensity }
    }
}

impl NoiseSource for ZeroNoise {
    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn sample(&self) -> f32 {
        0.0
    }
}
