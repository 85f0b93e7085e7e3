//! Deterministic RNG utilities for reproducible tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generate a deterministic sequence of `len` values in `[-1, 1)` from a seed.
///
/// Useful for scripting mock noise sources with realistic-looking samples.
pub fn scripted_samples(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = seeded_rng(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
