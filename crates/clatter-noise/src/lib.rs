//! Injectable scalar noise sources for sensor and signal simulation.
//!
//! `clatter-noise` provides a small, swappable noise capability: a source
//! holds an `intensity` fixed at construction and produces one `f32` draw per
//! [`sample`](source::NoiseSource::sample) call.  Consumers depend on the
//! trait, so tests can substitute a scripted double for the real strategy.
//!
//! # Architecture
//!
//! - [`NoiseSource`](source::NoiseSource) is the capability.  Sampling takes
//!   `&self`; generator state lives in private interior cells.
//! - Strategies: [`GaussianNoise`](gaussian::GaussianNoise),
//!   [`UniformNoise`](uniform::UniformNoise), [`ZeroNoise`](zero::ZeroNoise),
//!   [`BiasNoise`](bias::BiasNoise), and the additive
//!   [`ChainNoise`](chain::ChainNoise).
//! - [`MockNoiseSource`](mock::MockNoiseSource) is the hand-written test double.
//! - [`NoisySensor`](signal::NoisySensor) composes a clean signal with a source.
//! - [`factory`] builds sources from a TOML [`NoiseProfile`](clatter_core::config::NoiseProfile);
//!   [`presets`] provides ready-made sources for IMUs, encoders, and force sensors.
//!
//! # Quick Start
//!
//! ```
//! use clatter_noise::prelude::*;
//!
//! let noise = GaussianNoise::seeded(0.01, 42);
//! let sensor = NoisySensor::new("joint_0", ConstantSignal(1.0), noise);
//! let reading = sensor.read(0.0);
//! assert!((reading - 1.0).abs() < 0.1);
//! ```

pub mod bias;
pub mod chain;
pub mod factory;
pub mod gaussian;
pub mod mock;
pub mod presets;
pub mod signal;
pub mod source;
pub mod uniform;
pub mod zero;

#[cfg(test)]
mod test_support;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::bias::BiasNoise;
    pub use crate::chain::ChainNoise;
    pub use crate::factory::{build_profile, build_sensor, build_source, load_profile};
    pub use crate::gaussian::GaussianNoise;
    pub use crate::mock::MockNoiseSource;
    pub use crate::presets;
    pub use crate::signal::{ConstantSignal, NoisySensor, Signal};
    pub use crate::source::{BoxedNoise, NoiseSource};
    pub use crate::uniform::UniformNoise;
    pub use crate::zero::ZeroNoise;
}
