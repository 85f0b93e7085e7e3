//! Deterministic seed derivation for reproducible noise profiles.
//!
//! [`SeedHierarchy`] provides a 3-level derivation tree:
//!
//! ```text
//! Profile seed
//! └── Sensor seed (per named sensor)
//!     └── Layer seed (per member of a chained source)
//! ```
//!
//! Child seeds are derived by hashing, so a whole noise profile is
//! reproducible from a single root seed when built by the same toolchain.
//! `DefaultHasher`'s algorithm is unspecified and may change between Rust
//! releases; derived seeds are not stable across compiler upgrades.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Derive a child seed from a parent seed and a string key.
///
/// Uses `DefaultHasher` with fixed keys, so the result is deterministic
/// within one build.
///
/// # Example
///
/// ```
/// use clatter_core::seed::derive_seed;
///
/// let child = derive_seed(42, "joint_position");
/// assert_ne!(child, 42);
/// assert_eq!(child, derive_seed(42, "joint_position"));
/// ```
#[must_use]
pub fn derive_seed(parent: u64, key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    key.hash(&mut hasher);
    hasher.finish()
}

/// Derive a child seed from a parent seed and a numeric index.
#[must_use]
pub fn derive_seed_indexed(parent: u64, index: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    index.hash(&mut hasher);
    hasher.finish()
}

/// Root seed of a noise profile and the seeds derived from it.
///
/// # Example
///
/// ```
/// use clatter_core::seed::SeedHierarchy;
///
/// let seeds = SeedHierarchy::new(42);
/// let gyro = seeds.sensor_seed("gyro_x");
/// let gyro_bias = seeds.layer_seed("gyro_x", 1);
/// assert_ne!(gyro, gyro_bias);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    root: u64,
}

impl SeedHierarchy {
    #[must_use]
    pub const fn new(root: u64) -> Self {
        Self { root }
    }

    #[must_use]
    pub const fn root(&self) -> u64 {
        self.root
    }

    /// Seed for a named sensor.
    #[must_use]
    pub fn sensor_seed(&self, sensor: &str) -> u64 {
        derive_seed(self.root, sensor)
    }

    /// Seed for the `index`-th layer of a sensor's chained source.
    #[must_use]
    pub fn layer_seed(&self, sensor: &str, index: u64) -> u64 {
        derive_seed_indexed(self.sensor_seed(sensor), index)
    }
}

impl Default for SeedHierarchy {
    fn default() -> Self {
        Self::new(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
