//! Noisy sensor: a clean signal plus one injected noise source.

use crate::source::NoiseSource;

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// A clean, noise-free signal sampled at simulation time `t` (seconds).
pub trait Signal {
    fn value_at(&self, t: f64) -> f32;
}

impl<F: Fn(f64) -> f32> Signal for F {
    fn value_at(&self, t: f64) -> f32 {
        self(t)
    }
}

/// A signal that never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f32);

impl Signal for ConstantSignal {
    fn value_at(&self, _t: f64) -> f32 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// NoisySensor
// ---------------------------------------------------------------------------

/// Wraps a clean [`Signal`] and adds noise from an injected [`NoiseSource`].
///
/// Every [`read`](Self::read) calls `sample()` exactly once.  Pass a
/// [`MockNoiseSource`](crate::mock::MockNoiseSource) to make readings exact in
/// tests, or a shared reference to let several sensors draw from one stream.
#[derive(Debug, Clone)]
pub struct NoisySensor<S, N> {
    name: String,
    signal: S,
    noise: N,
}

impl<S: Signal, N: NoiseSource> NoisySensor<S, N> {
    pub fn new(name: impl Into<String>, signal: S, noise: N) -> Self {
        Self {
            name: name.into(),
            signal,
            noise,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn noise(&self) -> &N {
        &self.noise
    }

    pub const fn signal(&self) -> &S {
        &self.signal
    }

    /// Reading at time `t`: `signal(t) + sample()`.
    pub fn read(&self, t: f64) -> f32 {
        self.noise.apply(self.signal.value_at(t))
    }

    /// Noise-free reading at time `t`.  Does not sample.
    pub fn read_clean(&self, t: f64) -> f32 {
        self.signal.value_at(t)
    }

    /// One reading per timestamp, in order.
    pub fn trace(&self, times: impl IntoIterator<Item = f64>) -> Vec<f32> {
        times.into_iter().map(|t| self.read(t)).collect()
    }

    /// Add one sample to each element of `values` in place.
    pub fn compose_in_place(&self, values: &mut [f32]) {
        for v in values {
            *v = self.noise.apply(*v);
        }
    }

    /// Unwrap into name, signal and noise source.
    pub fn into_parts(self) -> (String, S, N) {
        (self.name, self.signal, self.noise)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
