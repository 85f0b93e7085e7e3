//! The [`NoiseSource`] capability.
//!
//! A noise source carries an `intensity` fixed at construction and hands out
//! one scalar draw per [`sample`](NoiseSource::sample) call.  Sampling takes
//! `&self`: strategies that keep a generator cursor hold it in a private
//! interior cell, so the public configuration is never mutated by a draw.
//!
//! Sampling has no failure channel.  A strategy that produces a non-finite
//! intermediate maps it to `0.0` via [`finite_or_zero`].

use std::rc::Rc;
use std::sync::Arc;

/// Injectable source of additive scalar noise.
///
/// Implementations are not required to be thread-safe.  Strategies with an
/// interior generator are `Send` but not `Sync`; strategies that are a pure
/// function of `intensity` (see [`ZeroNoise`](crate::zero::ZeroNoise)) are
/// `Sync` and may be shared across threads.
pub trait NoiseSource {
    /// Scale factor set at construction.  Never changes for an instance.
    fn intensity(&self) -> f64;

    /// Draw one noise sample.  Never fails.
    ///
    /// Stateful strategies advance their private generator on each call, so
    /// repeated calls are not idempotent (see [`is_stateful`](Self::is_stateful)).
    fn sample(&self) -> f32;

    /// Apply noise to a clean value: `clean + sample()`.
    fn apply(&self, clean: f32) -> f32 {
        clean + self.sample()
    }

    /// Returns `true` if successive [`sample`](Self::sample) calls depend on
    /// hidden state (a seeded stream, a scripted sequence).
    fn is_stateful(&self) -> bool {
        false
    }

    /// Redraw per-episode state such as a turn-on bias.  No-op by default.
    ///
    /// Composites reset every member.
    fn reset(&self) {}
}

/// Owned, type-erased noise source that can move between threads.
pub type BoxedNoise = Box<dyn NoiseSource + Send>;

// ---------------------------------------------------------------------------
// Shared read-only access
// ---------------------------------------------------------------------------

macro_rules! forward_noise_source {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<N: NoiseSource + ?Sized> NoiseSource for $ptr {
                fn intensity(&self) -> f64 {
                    (**self).intensity()
                }

                fn sample(&self) -> f32 {
                    (**self).sample()
                }

                fn apply(&self, clean: f32) -> f32 {
                    (**self).apply(clean)
                }

                fn is_stateful(&self) -> bool {
                    (**self).is_stateful()
                }

                fn reset(&self) {
                    (**self).reset();
                }
            }
        )*
    };
}

forward_noise_source!(&N, Box<N>, Rc<N>, Arc<N>);

// ---------------------------------------------------------------------------
// Sentinel mapping
// ---------------------------------------------------------------------------

/// Narrow a draw to `f32`, mapping anything non-finite to `0.0`.
///
/// Covers NaN/infinite intensities as well as finite `f64` draws that
/// overflow `f32`.
#[allow(clippy::cast_possible_truncation)] // intentional f64→f32 narrowing
#[must_use]
pub fn finite_or_zero(draw: f64) -> f32 {
    let narrowed = draw as f32;
    if narrowed.is_finite() {
        narrowed
    } else {
        tracing::trace!(draw, "non-finite noise draw mapped to 0.0");
        0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
