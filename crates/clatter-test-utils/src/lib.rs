//! Shared test fixtures and utilities for clatter crates.
//!
//! Provides a `mockall` mock of the noise capability, deterministic RNG setup,
//! tracing initialisation and warning capture for test binaries.

pub mod logging;
pub mod mocks;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use logging::{capture_warnings, init_tracing};
pub use mocks::{MockNoise, returning_mock, zero_intensity_mock};
pub use rng::{scripted_samples, seeded_rng};
